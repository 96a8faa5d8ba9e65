//! Silo-label subsystem tests: single-label set/unset, ordered multi-label
//! edits, duplicate rejection, and the empty-equals-absent reading.

use dispatch_core::store::{DispatchStore, NewEngineer, NewSilo};

fn setup() -> (DispatchStore, String, String) {
    let mut store = DispatchStore::new();
    let silo_id = store
        .add_silo(NewSilo {
            name: "Integration".to_string(),
            ..Default::default()
        })
        .id
        .clone();
    let engineer_id = store
        .add_engineer(NewEngineer {
            name: "Ada".to_string(),
            silo_ids: vec![silo_id.clone()],
            is_active: true,
            ..Default::default()
        })
        .id
        .clone();
    (store, engineer_id, silo_id)
}

#[test]
fn set_silo_label_stores_a_singleton_list() {
    let (mut store, engineer_id, silo_id) = setup();

    store.set_silo_label(&engineer_id, &silo_id, Some("primary"));
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["primary"]);

    // Setting again replaces, not appends.
    store.set_silo_label(&engineer_id, &silo_id, Some("backup"));
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["backup"]);
}

#[test]
fn unsetting_deletes_the_entry_entirely() {
    let (mut store, engineer_id, silo_id) = setup();
    store.set_silo_label(&engineer_id, &silo_id, Some("primary"));

    store.set_silo_label(&engineer_id, &silo_id, None);
    assert!(store.silo_labels(&engineer_id, &silo_id).is_empty());
    let engineer = store.engineer(&engineer_id).unwrap();
    assert!(!engineer.silo_labels.contains_key(&silo_id), "key removed, not emptied");

    // An empty string behaves like None.
    store.set_silo_label(&engineer_id, &silo_id, Some("primary"));
    store.set_silo_label(&engineer_id, &silo_id, Some("  "));
    assert!(store.silo_labels(&engineer_id, &silo_id).is_empty());
}

#[test]
fn adding_a_duplicate_label_is_a_noop() {
    let (mut store, engineer_id, silo_id) = setup();

    store.add_silo_label(&engineer_id, &silo_id, "mentor");
    store.add_silo_label(&engineer_id, &silo_id, "mentor");
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["mentor"]);

    store.add_silo_label(&engineer_id, &silo_id, "on-call");
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["mentor", "on-call"]);
}

#[test]
fn labels_keep_insertion_order_and_edit_by_index() {
    let (mut store, engineer_id, silo_id) = setup();
    for label in ["first", "second", "third"] {
        store.add_silo_label(&engineer_id, &silo_id, label);
    }

    store.edit_silo_label(&engineer_id, &silo_id, 1, "middle");
    assert_eq!(
        store.silo_labels(&engineer_id, &silo_id),
        ["first", "middle", "third"]
    );

    // Editing to empty removes that entry.
    store.edit_silo_label(&engineer_id, &silo_id, 0, "");
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["middle", "third"]);

    // Out-of-range edits change nothing.
    store.edit_silo_label(&engineer_id, &silo_id, 9, "nope");
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["middle", "third"]);
}

#[test]
fn removing_the_last_label_drops_the_key() {
    let (mut store, engineer_id, silo_id) = setup();
    store.add_silo_label(&engineer_id, &silo_id, "only");

    store.remove_silo_label(&engineer_id, &silo_id, 0);
    assert!(store.silo_labels(&engineer_id, &silo_id).is_empty());
    let engineer = store.engineer(&engineer_id).unwrap();
    assert!(!engineer.silo_labels.contains_key(&silo_id));

    // Removing from an already-empty pair is a no-op.
    store.remove_silo_label(&engineer_id, &silo_id, 0);
    assert!(store.silo_labels(&engineer_id, &silo_id).is_empty());
}

#[test]
fn label_edits_leave_other_silos_untouched() {
    let (mut store, engineer_id, silo_id) = setup();
    let other_silo = store
        .add_silo(NewSilo {
            name: "Reports".to_string(),
            ..Default::default()
        })
        .id
        .clone();

    store.add_silo_label(&engineer_id, &silo_id, "keep");
    store.add_silo_label(&engineer_id, &other_silo, "reports lead");

    store.remove_silo_label(&engineer_id, &other_silo, 0);
    assert_eq!(store.silo_labels(&engineer_id, &silo_id), ["keep"]);
}

#[test]
fn removing_engineer_from_silo_drops_membership_and_labels() {
    let (mut store, engineer_id, silo_id) = setup();
    store.add_silo_label(&engineer_id, &silo_id, "primary");

    store.remove_engineer_from_silo(&engineer_id, &silo_id);

    let engineer = store.engineer(&engineer_id).unwrap();
    assert!(engineer.silo_ids.is_empty());
    assert!(!engineer.silo_labels.contains_key(&silo_id));
    // The silo itself still exists.
    assert!(store.silo(&silo_id).is_some());
}

#[test]
fn label_operations_on_unknown_engineer_are_noops() {
    let (mut store, _engineer_id, silo_id) = setup();
    store.add_silo_label("nope", &silo_id, "x");
    store.set_silo_label("nope", &silo_id, Some("x"));
    store.remove_silo_label("nope", &silo_id, 0);
    assert!(store.silo_labels("nope", &silo_id).is_empty());
}
