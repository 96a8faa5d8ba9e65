//! Silo mutations, including the deletion cascade into engineer records.

use super::DispatchStore;
use crate::{id::new_entity_id, model::Silo};

/// Input for `add_silo`. The ID is assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewSilo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct SiloUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DispatchStore {
    pub fn add_silo(&mut self, new: NewSilo) -> &Silo {
        let silo = Silo {
            id: new_entity_id(),
            name: new.name,
            description: new.description,
        };
        self.silos_mut().push(silo);
        self.silos().last().unwrap()
    }

    pub fn update_silo(&mut self, id: &str, updates: SiloUpdate) {
        let Some(silo) = self.silos_mut().iter_mut().find(|s| s.id == id) else {
            log::warn!("update_silo: unknown silo {id}");
            return;
        };
        if let Some(name) = updates.name {
            silo.name = name;
        }
        if let Some(description) = updates.description {
            silo.description = description;
        }
    }

    /// Remove a silo and cascade into every engineer that references it:
    /// the silo leaves `silo_ids` and its `silo_labels` entry is deleted.
    /// One logically-atomic operation from the caller's point of view.
    pub fn remove_silo(&mut self, id: &str) {
        let before = self.silos().len();
        self.silos_mut().retain(|s| s.id != id);
        if self.silos().len() == before {
            log::warn!("remove_silo: unknown silo {id}");
            return;
        }
        for engineer in self.engineers_mut().iter_mut() {
            engineer.silo_ids.retain(|silo_id| silo_id != id);
            engineer.silo_labels.remove(id);
        }
    }

    pub fn silo(&self, id: &str) -> Option<&Silo> {
        self.silos().iter().find(|s| s.id == id)
    }
}
