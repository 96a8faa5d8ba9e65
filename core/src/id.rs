//! Opaque identifier generation.
//!
//! IDs are unique across all three entity kinds; nothing downstream
//! parses them, so the representation is free to change.

use crate::types::EntityId;
use uuid::Uuid;

/// Produce a fresh opaque ID for a new entity.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<EntityId> = (0..1000).map(|_| new_entity_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
