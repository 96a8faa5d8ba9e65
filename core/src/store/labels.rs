//! Silo-label subsystem.
//!
//! Labels annotate one engineer's membership in one silo, distinct from the
//! engineer's global status label. The store only supports replacing the
//! whole `silo_labels` map (shallow-merge contract), so every operation
//! here reads the current map, mutates a copy, and writes the full
//! replacement back through `update_engineer`.

use super::{DispatchStore, EngineerUpdate};

impl DispatchStore {
    /// Labels for one (engineer, silo) pair. Missing engineer, missing key,
    /// and empty list all read as "no labels".
    pub fn silo_labels(&self, engineer_id: &str, silo_id: &str) -> &[String] {
        self.engineer(engineer_id)
            .and_then(|e| e.silo_labels.get(silo_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Single-label surface: assigning a silo sets exactly one label per
    /// pair. `None` or an empty string deletes the entry entirely
    /// (uncheck-on-save semantics).
    pub fn set_silo_label(&mut self, engineer_id: &str, silo_id: &str, label: Option<&str>) {
        let Some(engineer) = self.engineer(engineer_id) else {
            log::warn!("set_silo_label: unknown engineer {engineer_id}");
            return;
        };
        let mut silo_labels = engineer.silo_labels.clone();
        match label {
            Some(text) if !text.trim().is_empty() => {
                silo_labels.insert(silo_id.to_string(), vec![text.trim().to_string()]);
            }
            _ => {
                silo_labels.remove(silo_id);
            }
        }
        self.update_engineer(
            engineer_id,
            EngineerUpdate {
                silo_labels: Some(silo_labels),
                ..Default::default()
            },
        );
    }

    /// Append a label to the pair's list. Adding text already present is a
    /// silent no-op.
    pub fn add_silo_label(&mut self, engineer_id: &str, silo_id: &str, label: &str) {
        let text = label.trim();
        if text.is_empty() {
            return;
        }
        let Some(engineer) = self.engineer(engineer_id) else {
            log::warn!("add_silo_label: unknown engineer {engineer_id}");
            return;
        };
        let mut silo_labels = engineer.silo_labels.clone();
        let labels = silo_labels.entry(silo_id.to_string()).or_default();
        if labels.iter().any(|existing| existing == text) {
            return;
        }
        labels.push(text.to_string());
        self.update_engineer(
            engineer_id,
            EngineerUpdate {
                silo_labels: Some(silo_labels),
                ..Default::default()
            },
        );
    }

    /// Replace the label at `index` (double-click-to-edit). An empty
    /// replacement removes the entry instead.
    pub fn edit_silo_label(&mut self, engineer_id: &str, silo_id: &str, index: usize, label: &str) {
        let text = label.trim();
        if text.is_empty() {
            self.remove_silo_label(engineer_id, silo_id, index);
            return;
        }
        let Some(engineer) = self.engineer(engineer_id) else {
            log::warn!("edit_silo_label: unknown engineer {engineer_id}");
            return;
        };
        let mut silo_labels = engineer.silo_labels.clone();
        match silo_labels.get_mut(silo_id).and_then(|l| l.get_mut(index)) {
            Some(slot) => *slot = text.to_string(),
            None => return,
        }
        self.update_engineer(
            engineer_id,
            EngineerUpdate {
                silo_labels: Some(silo_labels),
                ..Default::default()
            },
        );
    }

    /// Delete the label at `index`. A list emptied by the edit drops its
    /// key, so readers never distinguish empty from absent.
    pub fn remove_silo_label(&mut self, engineer_id: &str, silo_id: &str, index: usize) {
        let Some(engineer) = self.engineer(engineer_id) else {
            log::warn!("remove_silo_label: unknown engineer {engineer_id}");
            return;
        };
        let mut silo_labels = engineer.silo_labels.clone();
        let Some(labels) = silo_labels.get_mut(silo_id) else {
            return;
        };
        if index >= labels.len() {
            return;
        }
        labels.remove(index);
        if labels.is_empty() {
            silo_labels.remove(silo_id);
        }
        self.update_engineer(
            engineer_id,
            EngineerUpdate {
                silo_labels: Some(silo_labels),
                ..Default::default()
            },
        );
    }

    /// Drop a silo membership and its labels in one write.
    pub fn remove_engineer_from_silo(&mut self, engineer_id: &str, silo_id: &str) {
        let Some(engineer) = self.engineer(engineer_id) else {
            log::warn!("remove_engineer_from_silo: unknown engineer {engineer_id}");
            return;
        };
        let mut silo_ids = engineer.silo_ids.clone();
        silo_ids.retain(|id| id != silo_id);
        let mut silo_labels = engineer.silo_labels.clone();
        silo_labels.remove(silo_id);
        self.update_engineer(
            engineer_id,
            EngineerUpdate {
                silo_ids: Some(silo_ids),
                silo_labels: Some(silo_labels),
                ..Default::default()
            },
        );
    }
}
