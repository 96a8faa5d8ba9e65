//! In-memory entity store.
//!
//! RULE: the store is the single owner of the engineer, silo, and case
//! collections. Aggregators derive views from it on every query — nothing
//! caches a copy across mutations.
//!
//! Mutations on an unknown ID are silent no-ops (logged at warn level):
//! the view layer only ever supplies IDs it obtained from the store, so a
//! miss is stale UI state, never a condition worth failing an action over.

mod case;
mod engineer;
mod labels;
mod silo;

pub use case::{CaseUpdate, NewCase};
pub use engineer::{EngineerUpdate, NewEngineer};
pub use silo::{NewSilo, SiloUpdate};

use crate::{
    confirm::PendingDeletion,
    daily::{daily_board, DailyBoard},
    model::{Case, Engineer, Silo},
    types::{CalendarDate, EngineerId},
    weekly::{week_monday, weekly_distribution, WeeklyDistribution},
};
use chrono::Utc;
use std::collections::HashMap;

pub struct DispatchStore {
    engineers: Vec<Engineer>,
    silos: Vec<Silo>,
    cases: Vec<Case>,
    /// Manually entered per-day head start, independent of the case
    /// collection. Keyed by (date, engineer).
    starting_counts: HashMap<(CalendarDate, EngineerId), u32>,
    pending_deletions: Vec<PendingDeletion>,
}

impl DispatchStore {
    pub fn new() -> Self {
        Self {
            engineers: Vec::new(),
            silos: Vec::new(),
            cases: Vec::new(),
            starting_counts: HashMap::new(),
            pending_deletions: Vec::new(),
        }
    }

    // ── Full-collection snapshots (insertion order) ───────────────

    pub fn engineers(&self) -> &[Engineer] {
        &self.engineers
    }

    pub fn silos(&self) -> &[Silo] {
        &self.silos
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    // ── Derived views ─────────────────────────────────────────────

    /// Group the day's cases by engineer, plus the unassigned bucket.
    pub fn daily_cases(&self, date: CalendarDate) -> DailyBoard {
        daily_board(&self.engineers, &self.cases, date)
    }

    /// The Mon–Fri rollup for the week containing `monday`.
    pub fn week_distribution(&self, monday: CalendarDate) -> WeeklyDistribution {
        weekly_distribution(&self.engineers, &self.cases, monday)
    }

    /// The rollup for the current week, Monday picked off the system clock.
    pub fn current_week_distribution(&self) -> WeeklyDistribution {
        self.week_distribution(week_monday(Utc::now().date_naive()))
    }

    // ── Starting case counts ──────────────────────────────────────

    /// Record the manually entered starting count for an engineer on a day.
    /// Zero clears the entry.
    pub fn set_starting_count(&mut self, date: CalendarDate, engineer_id: &str, count: u32) {
        if count == 0 {
            self.starting_counts.remove(&(date, engineer_id.to_string()));
        } else {
            self.starting_counts
                .insert((date, engineer_id.to_string()), count);
        }
    }

    pub fn starting_count(&self, date: CalendarDate, engineer_id: &str) -> u32 {
        self.starting_counts
            .get(&(date, engineer_id.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Board bucket length plus the starting count — the number the daily
    /// view actually displays for an engineer.
    pub fn displayed_total(&self, date: CalendarDate, engineer_id: &str) -> usize {
        let board = self.daily_cases(date);
        let on_board = board.bucket(engineer_id).map_or(0, |bucket| bucket.len());
        on_board + self.starting_count(date, engineer_id) as usize
    }

    // ── Internal accessors for submodules ─────────────────────────

    pub(crate) fn engineers_mut(&mut self) -> &mut Vec<Engineer> {
        &mut self.engineers
    }

    pub(crate) fn silos_mut(&mut self) -> &mut Vec<Silo> {
        &mut self.silos
    }

    pub(crate) fn cases_mut(&mut self) -> &mut Vec<Case> {
        &mut self.cases
    }

    pub(crate) fn pending_deletions_mut(&mut self) -> &mut Vec<PendingDeletion> {
        &mut self.pending_deletions
    }
}

impl Default for DispatchStore {
    fn default() -> Self {
        Self::new()
    }
}
