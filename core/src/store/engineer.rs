//! Engineer roster mutations.

use super::DispatchStore;
use crate::{id::new_entity_id, model::Engineer, types::SiloId};
use std::collections::BTreeMap;

/// Input for `add_engineer`. The ID is assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewEngineer {
    pub name: String,
    /// Derived from the name when empty.
    pub email: String,
    pub silo_ids: Vec<SiloId>,
    pub is_active: bool,
    pub label: Option<String>,
    pub disable_assignment: bool,
}

/// Partial update. A `Some` field replaces the prior value wholesale;
/// `silo_labels` in particular is replace-not-merge — callers read the
/// current map, mutate a copy, and write the whole thing back.
#[derive(Debug, Clone, Default)]
pub struct EngineerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub silo_ids: Option<Vec<SiloId>>,
    pub is_active: Option<bool>,
    pub silo_labels: Option<BTreeMap<SiloId, Vec<String>>>,
    pub label: Option<Option<String>>,
    pub disable_assignment: Option<bool>,
}

impl DispatchStore {
    pub fn add_engineer(&mut self, new: NewEngineer) -> &Engineer {
        let email = if new.email.is_empty() {
            derive_email(&new.name)
        } else {
            new.email
        };
        let engineer = Engineer {
            id: new_entity_id(),
            name: new.name,
            email,
            silo_ids: new.silo_ids,
            is_active: new.is_active,
            silo_labels: BTreeMap::new(),
            label: new.label,
            disable_assignment: new.disable_assignment,
        };
        self.engineers_mut().push(engineer);
        self.engineers().last().unwrap()
    }

    pub fn update_engineer(&mut self, id: &str, updates: EngineerUpdate) {
        let Some(engineer) = self.engineers_mut().iter_mut().find(|e| e.id == id) else {
            log::warn!("update_engineer: unknown engineer {id}");
            return;
        };
        if let Some(name) = updates.name {
            engineer.name = name;
        }
        if let Some(email) = updates.email {
            engineer.email = email;
        }
        if let Some(silo_ids) = updates.silo_ids {
            engineer.silo_ids = silo_ids;
        }
        if let Some(is_active) = updates.is_active {
            engineer.is_active = is_active;
        }
        if let Some(silo_labels) = updates.silo_labels {
            engineer.silo_labels = silo_labels;
        }
        if let Some(label) = updates.label {
            engineer.label = label;
        }
        if let Some(disable_assignment) = updates.disable_assignment {
            engineer.disable_assignment = disable_assignment;
        }
    }

    pub fn remove_engineer(&mut self, id: &str) {
        let before = self.engineers().len();
        self.engineers_mut().retain(|e| e.id != id);
        if self.engineers().len() == before {
            log::warn!("remove_engineer: unknown engineer {id}");
        }
    }

    pub fn engineer(&self, id: &str) -> Option<&Engineer> {
        self.engineers().iter().find(|e| e.id == id)
    }

    /// Active engineers in roster order — the set the daily board buckets.
    pub fn active_engineers(&self) -> impl Iterator<Item = &Engineer> {
        self.engineers().iter().filter(|e| e.is_active)
    }
}

/// "Jane Q Doe" -> "jane.q.doe@example.com".
fn derive_email(name: &str) -> String {
    let local: String = name.to_lowercase().split_whitespace().collect::<Vec<_>>().join(".");
    format!("{local}@example.com")
}

#[cfg(test)]
mod tests {
    use super::derive_email;

    #[test]
    fn email_derived_from_name() {
        assert_eq!(derive_email("Jane Q Doe"), "jane.q.doe@example.com");
        assert_eq!(derive_email("Ada"), "ada@example.com");
    }
}
