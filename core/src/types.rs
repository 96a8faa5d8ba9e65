//! Shared primitive types used across the dispatch core.

use chrono::NaiveDate;

/// A stable, unique identifier for any entity in the store.
pub type EntityId = String;

pub type EngineerId = String;
pub type SiloId = String;
pub type CaseId = String;

/// A calendar day. All board queries are keyed by day, not instant.
pub type CalendarDate = NaiveDate;
