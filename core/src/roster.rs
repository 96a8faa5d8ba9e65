//! Temporary roster persistence.
//!
//! The one artifact that outlives the process: a flat list of roster
//! entries serialized as JSON under a fixed file name, read once at
//! startup and rewritten wholesale after every change. Writes are
//! fire-and-forget — a failure is logged and the in-memory list stays
//! authoritative for the rest of the session (last write wins).

use crate::{
    error::DispatchResult,
    id::new_entity_id,
    types::{CalendarDate, EngineerId, EntityId},
    weekly::week_dates,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key, matching the persisted format.
pub const ROSTER_FILE_NAME: &str = "temporary_roster.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: EntityId,
    pub engineer_id: EngineerId,
    pub date: CalendarDate,
    /// "HH:MM", half-hour grid from 08:00 to 16:30.
    pub start_time: String,
    pub end_time: String,
}

pub struct RosterStore {
    /// None for in-memory stores (tests); Some(path) persists.
    path: Option<PathBuf>,
    entries: Vec<RosterEntry>,
}

impl RosterStore {
    /// Read the roster file under `dir` once. A missing file is an empty
    /// roster, not an error.
    pub fn open(dir: &Path) -> DispatchResult<Self> {
        let path = dir.join(ROSTER_FILE_NAME);
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: Some(path),
            entries,
        })
    }

    /// A roster with no backing file (used in tests).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn add(
        &mut self,
        engineer_id: &str,
        date: CalendarDate,
        start_time: &str,
        end_time: &str,
    ) -> &RosterEntry {
        self.entries.push(RosterEntry {
            id: new_entity_id(),
            engineer_id: engineer_id.to_string(),
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
        });
        self.persist();
        self.entries.last().unwrap()
    }

    pub fn update(
        &mut self,
        id: &str,
        date: CalendarDate,
        start_time: &str,
        end_time: &str,
    ) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            log::warn!("roster update: unknown entry {id}");
            return;
        };
        entry.date = date;
        entry.start_time = start_time.to_string();
        entry.end_time = end_time.to_string();
        self.persist();
    }

    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            log::warn!("roster remove: unknown entry {id}");
            return;
        }
        self.persist();
    }

    /// Entries falling inside the Mon–Fri window starting at `monday`.
    pub fn entries_for_week(&self, monday: CalendarDate) -> Vec<&RosterEntry> {
        let dates = week_dates(monday);
        self.entries
            .iter()
            .filter(|e| dates.contains(&e.date))
            .collect()
    }

    /// Rewrite the whole file. No acknowledgment, no read-modify-write
    /// protection — last write wins.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("roster serialize failed: {err}");
                return;
            }
        };
        if let Err(err) = fs::write(path, json) {
            log::warn!("roster write to {} failed: {err}", path.display());
        }
    }
}
