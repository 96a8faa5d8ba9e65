//! Daily board derivation.
//!
//! Pure function over (engineers, cases, date) so the grouping stays
//! testable without a store and a caching layer could slot in later
//! without touching call sites. Recomputed from scratch on every query;
//! collection sizes are small enough that this wins over incremental
//! bookkeeping.

use crate::{
    model::{Case, Engineer},
    types::{CalendarDate, EngineerId},
};
use std::collections::HashMap;

/// One day's cases grouped by active engineer, plus the unassigned bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyBoard {
    pub date: CalendarDate,
    buckets: HashMap<EngineerId, Vec<Case>>,
    unassigned: Vec<Case>,
}

impl DailyBoard {
    /// The bucket for an engineer. `None` means the engineer was not
    /// included (inactive or unknown), which is distinct from an included
    /// engineer with an empty bucket.
    pub fn bucket(&self, engineer_id: &str) -> Option<&[Case]> {
        self.buckets.get(engineer_id).map(Vec::as_slice)
    }

    pub fn unassigned(&self) -> &[Case] {
        &self.unassigned
    }

    /// Engineer IDs that have a bucket on this board.
    pub fn engineer_ids(&self) -> impl Iterator<Item = &EngineerId> {
        self.buckets.keys()
    }

    /// Critical (SEV 1) subset of an engineer's bucket. Pure filter, no
    /// separate stored state.
    pub fn critical_cases(&self, engineer_id: &str) -> Vec<&Case> {
        self.bucket(engineer_id)
            .into_iter()
            .flatten()
            .filter(|c| c.is_critical())
            .collect()
    }

    pub fn normal_cases(&self, engineer_id: &str) -> Vec<&Case> {
        self.bucket(engineer_id)
            .into_iter()
            .flatten()
            .filter(|c| !c.is_critical())
            .collect()
    }

    /// Count of cases visible anywhere on the board, unassigned included.
    /// Cases assigned to inactive engineers are not visible and not counted.
    pub fn visible_total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum::<usize>() + self.unassigned.len()
    }
}

/// Derive the board for `date`.
///
/// A case qualifies when it was created on `date` or slotted onto `date`;
/// the two conditions are independent, so a case created on day X and
/// assigned to day Y shows on both boards. A qualifying case assigned to
/// an engineer with no bucket (inactive) is dropped, not rerouted to
/// unassigned — observed board behavior, covered by tests.
pub fn daily_board(engineers: &[Engineer], cases: &[Case], date: CalendarDate) -> DailyBoard {
    let mut buckets: HashMap<EngineerId, Vec<Case>> = engineers
        .iter()
        .filter(|e| e.is_active)
        .map(|e| (e.id.clone(), Vec::new()))
        .collect();
    let mut unassigned = Vec::new();

    for case in cases.iter().filter(|c| c.on_board_for(date)) {
        match &case.assigned_to {
            Some(engineer_id) => {
                if let Some(bucket) = buckets.get_mut(engineer_id) {
                    bucket.push(case.clone());
                }
            }
            None => unassigned.push(case.clone()),
        }
    }

    log::debug!(
        "daily_board {date}: {} buckets, {} unassigned",
        buckets.len(),
        unassigned.len()
    );

    DailyBoard {
        date,
        buckets,
        unassigned,
    }
}
