//! Weekly distribution rollup.
//!
//! A pure fold over five daily boards (Mon–Fri). Recomputed on every query
//! from the live collections, never incrementally maintained.

use crate::{
    daily::daily_board,
    model::{Case, Engineer},
    types::{CalendarDate, CaseId, EngineerId},
};
use chrono::{Datelike, Days, Weekday};
use std::collections::{BTreeMap, HashMap};

pub const WEEK_DAYS: usize = 5;

/// The Mon–Fri rollup the weekly table renders.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyDistribution {
    pub week_start: CalendarDate,
    /// Engineer -> date -> case IDs on that day's board.
    pub assignments: HashMap<EngineerId, BTreeMap<CalendarDate, Vec<CaseId>>>,
    /// Total across all active engineers, per day.
    pub daily_totals: BTreeMap<CalendarDate, usize>,
    /// Total across all five days, per engineer.
    pub engineer_totals: HashMap<EngineerId, usize>,
    pub grand_total: usize,
}

impl WeeklyDistribution {
    pub fn cases_for(&self, engineer_id: &str, date: CalendarDate) -> &[CaseId] {
        self.assignments
            .get(engineer_id)
            .and_then(|per_day| per_day.get(&date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Monday of the week containing `date`. Saturday and Sunday roll back to
/// the preceding Monday.
pub fn week_monday(date: CalendarDate) -> CalendarDate {
    let days_back = date.weekday().num_days_from_monday() as u64;
    date - Days::new(days_back)
}

/// The five working days starting at `monday`.
pub fn week_dates(monday: CalendarDate) -> [CalendarDate; WEEK_DAYS] {
    debug_assert_eq!(monday.weekday(), Weekday::Mon);
    std::array::from_fn(|i| monday + Days::new(i as u64))
}

/// Fold five daily boards into the weekly table. Only active engineers
/// contribute; the unassigned bucket is not part of the weekly view.
pub fn weekly_distribution(
    engineers: &[Engineer],
    cases: &[Case],
    monday: CalendarDate,
) -> WeeklyDistribution {
    let mut assignments: HashMap<EngineerId, BTreeMap<CalendarDate, Vec<CaseId>>> = HashMap::new();
    let mut daily_totals: BTreeMap<CalendarDate, usize> = BTreeMap::new();
    let mut engineer_totals: HashMap<EngineerId, usize> = HashMap::new();
    let mut grand_total = 0;

    for engineer in engineers.iter().filter(|e| e.is_active) {
        assignments.insert(engineer.id.clone(), BTreeMap::new());
        engineer_totals.insert(engineer.id.clone(), 0);
    }

    for date in week_dates(monday) {
        let board = daily_board(engineers, cases, date);
        let mut day_total = 0;

        for engineer in engineers.iter().filter(|e| e.is_active) {
            let case_ids: Vec<CaseId> = board
                .bucket(&engineer.id)
                .into_iter()
                .flatten()
                .map(|c| c.id.clone())
                .collect();
            day_total += case_ids.len();
            *engineer_totals.entry(engineer.id.clone()).or_default() += case_ids.len();
            assignments
                .entry(engineer.id.clone())
                .or_default()
                .insert(date, case_ids);
        }

        grand_total += day_total;
        daily_totals.insert(date, day_total);
    }

    WeeklyDistribution {
        week_start: monday,
        assignments,
        daily_totals,
        engineer_totals,
        grand_total,
    }
}
