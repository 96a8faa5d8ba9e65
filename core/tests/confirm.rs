//! Two-step deletion confirmation tests.

use dispatch_core::confirm::DeleteTarget;
use dispatch_core::error::DispatchError;
use dispatch_core::store::{DispatchStore, NewCase, NewEngineer, NewSilo};

fn seeded() -> (DispatchStore, String, String, String) {
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
    let case_id = store
        .add_case(NewCase {
            case_number: "TS0000001".to_string(),
            ..Default::default()
        })
        .id
        .clone();
    (store, engineer_id, silo_id, case_id)
}

#[test]
fn requesting_alone_deletes_nothing() {
    let (mut store, engineer_id, _, _) = seeded();
    let _token = store.request_deletion(DeleteTarget::Engineer(engineer_id.clone()));
    assert!(store.engineer(&engineer_id).is_some());
}

#[test]
fn confirming_executes_the_staged_deletion() {
    let (mut store, _, _, case_id) = seeded();
    let token = store.request_deletion(DeleteTarget::Case(case_id.clone()));
    store.confirm_deletion(&token).unwrap();
    assert!(store.case(&case_id).is_none());

    // A token is single-use.
    assert!(matches!(
        store.confirm_deletion(&token),
        Err(DispatchError::UnknownConfirmToken)
    ));
}

#[test]
fn confirmed_silo_deletion_cascades() {
    let (mut store, engineer_id, silo_id, _) = seeded();
    store.add_silo_label(&engineer_id, &silo_id, "primary");

    let token = store.request_deletion(DeleteTarget::Silo(silo_id.clone()));
    store.confirm_deletion(&token).unwrap();

    assert!(store.silo(&silo_id).is_none());
    let engineer = store.engineer(&engineer_id).unwrap();
    assert!(engineer.silo_ids.is_empty());
    assert!(!engineer.silo_labels.contains_key(&silo_id));
}

#[test]
fn cancelling_discards_the_token_and_keeps_state() {
    let (mut store, engineer_id, _, _) = seeded();
    let token = store.request_deletion(DeleteTarget::Engineer(engineer_id.clone()));
    store.cancel_deletion(&token).unwrap();

    assert!(store.engineer(&engineer_id).is_some());
    assert!(matches!(
        store.confirm_deletion(&token),
        Err(DispatchError::UnknownConfirmToken)
    ));
}
