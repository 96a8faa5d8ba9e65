//! Case lifecycle mutations.

use super::DispatchStore;
use crate::{
    error::{DispatchError, DispatchResult},
    id::new_entity_id,
    model::{Case, CaseStatus, Priority},
    types::{CalendarDate, EngineerId},
};
use chrono::{DateTime, Utc};

/// Input for `add_case`. Everything but the case number is optional;
/// defaults match what the dialog supplies when a field is left blank.
#[derive(Debug, Clone, Default)]
pub struct NewCase {
    pub case_number: String,
    pub description: String,
    pub customer: String,
    pub priority: Option<Priority>,
    pub status: Option<CaseStatus>,
    pub assigned_to: Option<EngineerId>,
    pub date_created: Option<DateTime<Utc>>,
    pub date_assigned: Option<CalendarDate>,
}

impl NewCase {
    /// Caller-side validation, run before the mutation is attempted.
    /// The store itself never rejects business-rule violations.
    pub fn validate(&self) -> DispatchResult<()> {
        if self.case_number.trim().is_empty() {
            return Err(DispatchError::Validation {
                field: "case_number",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaseUpdate {
    pub description: Option<String>,
    pub customer: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<CaseStatus>,
    pub assigned_to: Option<Option<EngineerId>>,
    pub date_assigned: Option<Option<CalendarDate>>,
    pub date_resolved: Option<Option<DateTime<Utc>>>,
}

impl DispatchStore {
    /// Append a case, filling defaults: status New, priority Medium,
    /// unassigned, created now, no board date. No uniqueness constraint
    /// on the case number — duplicates are permitted.
    pub fn add_case(&mut self, new: NewCase) -> &Case {
        let case = Case {
            id: new_entity_id(),
            case_number: new.case_number,
            description: new.description,
            customer: new.customer,
            priority: new.priority.unwrap_or(Priority::Medium),
            status: new.status.unwrap_or(CaseStatus::New),
            assigned_to: new.assigned_to,
            date_created: new.date_created.unwrap_or_else(Utc::now),
            date_assigned: new.date_assigned,
            date_resolved: None,
        };
        self.cases_mut().push(case);
        self.cases().last().unwrap()
    }

    pub fn update_case(&mut self, id: &str, updates: CaseUpdate) {
        let Some(case) = self.cases_mut().iter_mut().find(|c| c.id == id) else {
            log::warn!("update_case: unknown case {id}");
            return;
        };
        if let Some(description) = updates.description {
            case.description = description;
        }
        if let Some(customer) = updates.customer {
            case.customer = customer;
        }
        if let Some(priority) = updates.priority {
            case.priority = priority;
        }
        if let Some(status) = updates.status {
            case.status = status;
        }
        if let Some(assigned_to) = updates.assigned_to {
            case.assigned_to = assigned_to;
        }
        if let Some(date_assigned) = updates.date_assigned {
            case.date_assigned = date_assigned;
        }
        if let Some(date_resolved) = updates.date_resolved {
            case.date_resolved = date_resolved;
        }
    }

    pub fn remove_case(&mut self, id: &str) {
        let before = self.cases().len();
        self.cases_mut().retain(|c| c.id != id);
        if self.cases().len() == before {
            log::warn!("remove_case: unknown case {id}");
        }
    }

    /// Reassignment always touches `assigned_to` and `date_assigned`
    /// together, hence the dedicated mutation.
    pub fn assign_case(
        &mut self,
        case_id: &str,
        engineer_id: Option<EngineerId>,
        date_assigned: CalendarDate,
    ) {
        let Some(case) = self.cases_mut().iter_mut().find(|c| c.id == case_id) else {
            log::warn!("assign_case: unknown case {case_id}");
            return;
        };
        case.assigned_to = engineer_id;
        case.date_assigned = Some(date_assigned);
    }

    pub fn case(&self, id: &str) -> Option<&Case> {
        self.cases().iter().find(|c| c.id == id)
    }
}
