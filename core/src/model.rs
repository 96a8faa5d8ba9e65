//! Entity records owned by the dispatch store.
//!
//! Silo labels are stored uniformly as ordered lists. Older data written by
//! the single-label silo page stored a bare string per silo; the custom
//! deserializer on `silo_labels` still accepts that shape and lifts it into
//! a singleton list.

use crate::types::{CaseId, EngineerId, SiloId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Engineer {
    pub id: EngineerId,
    pub name: String,
    pub email: String,
    pub silo_ids: Vec<SiloId>,
    pub is_active: bool,
    /// Free-text annotations scoped to one silo membership, keyed by silo.
    /// Missing key and empty list both read as "no labels".
    #[serde(default, deserialize_with = "deserialize_silo_labels")]
    pub silo_labels: BTreeMap<SiloId, Vec<String>>,
    /// Optional global status label, e.g. "On Leave".
    #[serde(default)]
    pub label: Option<String>,
    /// When true the engineer accepts no new assignments in the UI but
    /// keeps historical data.
    #[serde(default)]
    pub disable_assignment: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Silo {
    pub id: SiloId,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Display mapping: Critical=SEV 1 down to Low=SEV 4.
    pub fn severity(self) -> u8 {
        match self {
            Priority::Critical => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaseStatus {
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Waiting,
    Resolved,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: CaseId,
    /// User-supplied identifier. Required, immutable after creation.
    /// Duplicates across cases are permitted.
    pub case_number: String,
    pub description: String,
    pub customer: String,
    pub priority: Priority,
    pub status: CaseStatus,
    pub assigned_to: Option<EngineerId>,
    /// Set at creation, immutable.
    pub date_created: DateTime<Utc>,
    /// The day the case is slotted into the dispatch board. Touched
    /// together with `assigned_to` on reassignment.
    pub date_assigned: Option<NaiveDate>,
    #[serde(default)]
    pub date_resolved: Option<DateTime<Utc>>,
}

impl Case {
    /// Critical cases get the "SEV 1" treatment on the daily board.
    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }

    /// True when the case belongs on the board for `date`: created that day
    /// or slotted onto that day. Both conditions qualify independently.
    pub fn on_board_for(&self, date: NaiveDate) -> bool {
        self.date_created.date_naive() == date || self.date_assigned == Some(date)
    }
}

/// Accepts both the list shape and the legacy bare-string shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelShape {
    One(String),
    Many(Vec<String>),
}

fn deserialize_silo_labels<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<SiloId, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<SiloId, LabelShape> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(silo_id, shape)| {
            let labels = match shape {
                LabelShape::One(label) => vec![label],
                LabelShape::Many(labels) => labels,
            };
            (silo_id, labels)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_mapping() {
        assert_eq!(Priority::Critical.severity(), 1);
        assert_eq!(Priority::High.severity(), 2);
        assert_eq!(Priority::Medium.severity(), 3);
        assert_eq!(Priority::Low.severity(), 4);
    }

    #[test]
    fn silo_labels_accept_legacy_string_shape() {
        let json = r#"{
            "id": "e1", "name": "Ada", "email": "ada@example.com",
            "silo_ids": ["s1", "s2"], "is_active": true,
            "silo_labels": {"s1": "primary", "s2": ["backup", "mentor"]}
        }"#;
        let engineer: Engineer = serde_json::from_str(json).unwrap();
        assert_eq!(engineer.silo_labels["s1"], vec!["primary"]);
        assert_eq!(engineer.silo_labels["s2"], vec!["backup", "mentor"]);
    }
}
