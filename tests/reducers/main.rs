//! Integration tests for the event router: one event stream in, one
//! consistent state out.


use normalized_rust::{Entity, EntityId, Event, RequestSlot, StoreState, WorkflowOp};

use fixtures::{document, fetched};

#[test]
fn fetch_populates_ids_and_entities() {
    let state = StoreState::new().apply(&Event::FetchSucceeded {
        ids: vec![5145.into(), 5146.into()],
        entities: vec![
            document(5145, "Document_Library"),
            document(5146, "Calendar"),
        ],
    });

    assert_eq!(state.ids(), &[EntityId::from(5145), EntityId::from(5146)]);
    assert_eq!(
        state.entity_by_id(&5145.into()),
        Some(&document(5145, "Document_Library"))
    );
    assert_eq!(
        state.entity_by_id(&5146.into()),
        Some(&document(5146, "Calendar"))
    );
}

#[test]
fn refetch_makes_the_server_order_authoritative() {
    let state = fetched(&[1, 2, 3]).apply(&Event::FetchSucceeded {
        ids: vec![3.into(), 1.into()],
        entities: vec![document(3, "C"), document(1, "A")],
    });

    assert_eq!(state.ids(), &[EntityId::from(3), EntityId::from(1)]);
}

#[test]
fn create_appends_and_caches() {
    let state = fetched(&[1, 2]).apply(&Event::CreateSucceeded {
        entity: document(3, "New Document"),
    });

    assert_eq!(
        state.ids(),
        &[EntityId::from(1), EntityId::from(2), EntityId::from(3)]
    );
    assert!(state.entity_by_id(&3.into()).is_some());
}

#[test]
fn upload_of_new_entity_appends() {
    let state = fetched(&[1]).apply(&Event::UploadSucceeded {
        entity: document(2, "Scan.pdf"),
    });

    assert_eq!(state.ids(), &[EntityId::from(1), EntityId::from(2)]);
}

#[test]
fn upload_over_existing_entity_merges_in_place() {
    let state = fetched(&[1, 2]).apply(&Event::UploadSucceeded {
        entity: document(2, "Scan_v2.pdf"),
    });

    assert_eq!(state.ids(), &[EntityId::from(1), EntityId::from(2)]);
    assert_eq!(
        state.entity_by_id(&2.into()).unwrap().field("DisplayName"),
        Some(&serde_json::json!("Scan_v2.pdf"))
    );
}

#[test]
fn delete_removes_by_observed_index() {
    let state = fetched(&[1, 2, 3]).apply(&Event::DeleteSucceeded {
        index: 0,
        id: 1.into(),
    });

    assert_eq!(state.ids(), &[EntityId::from(2), EntityId::from(3)]);
    assert!(state.entity_by_id(&1.into()).is_none());
}

#[test]
fn batch_delete_removes_the_reported_subset() {
    let state = fetched(&[1, 2, 3]).apply(&Event::BatchDeleteSucceeded {
        results: vec![1.into(), 2.into()],
    });

    assert_eq!(state.ids(), &[EntityId::from(3)]);
}

#[test]
fn batch_move_behaves_like_batch_delete_for_the_source_collection() {
    let state = fetched(&[1, 2, 3]).apply(&Event::BatchMoveSucceeded {
        results: vec![2.into()],
    });

    assert_eq!(state.ids(), &[EntityId::from(1), EntityId::from(3)]);
    assert!(state.entity_by_id(&2.into()).is_none());
}

#[test]
fn empty_batch_result_changes_nothing() {
    let before = fetched(&[1, 2, 3]);
    let after = before
        .clone()
        .apply(&Event::BatchDeleteSucceeded { results: vec![] });

    assert_eq!(after.ids(), before.ids());
    assert_eq!(after.collection.entities, before.collection.entities);
}

#[test]
fn partial_batch_success_only_removes_reported_items() {
    // Five requested, two reported back: the other three stay put.
    let state = fetched(&[1, 2, 3, 4, 5]).apply(&Event::BatchDeleteSucceeded {
        results: vec![2.into(), 4.into()],
    });

    assert_eq!(
        state.ids(),
        &[EntityId::from(1), EntityId::from(3), EntityId::from(5)]
    );
}

#[test]
fn workflow_success_refreshes_the_cached_record() {
    let state = fetched(&[1]).apply(&Event::WorkflowSucceeded {
        op: WorkflowOp::Publish,
        entity: Entity::new(1)
            .with_field("DisplayName", "Item 1")
            .with_field("Version", "V2.0"),
    });

    assert_eq!(state.ids(), &[EntityId::from(1)]);
    assert_eq!(
        state.entity_by_id(&1.into()).unwrap().field("Version"),
        Some(&serde_json::json!("V2.0"))
    );
}

#[test]
fn failures_never_touch_the_cache() {
    let before = fetched(&[1, 2, 3]);

    let failures = [
        Event::FetchFailed {
            error: "timeout".to_string(),
        },
        Event::CreateFailed {
            error: "forbidden".to_string(),
        },
        Event::UpdateFailed {
            error: "conflict".to_string(),
        },
        Event::DeleteFailed {
            error: "locked".to_string(),
        },
        Event::BatchDeleteFailed {
            error: "partial outage".to_string(),
        },
        Event::UploadFailed {
            error: "too large".to_string(),
        },
        Event::WorkflowFailed {
            op: WorkflowOp::Approve,
            error: "not yours".to_string(),
        },
    ];

    for failure in failures {
        let after = before.clone().apply(&failure);
        assert_eq!(after.ids(), before.ids(), "ids changed on {}", failure.kind());
        assert_eq!(
            after.collection.entities, before.collection.entities,
            "entities changed on {}",
            failure.kind()
        );
        assert!(after.error().is_some(), "error not set on {}", failure.kind());
    }
}

#[test]
fn lifecycle_tracks_the_mutation_slot() {
    let state = fetched(&[1]).apply(&Event::CreateRequested);
    assert!(state.lifecycle().is_operation_in_progress());
    assert!(!state.lifecycle().is_saved);

    let state = state.apply(&Event::CreateSucceeded {
        entity: document(2, "New"),
    });
    assert!(!state.lifecycle().is_operation_in_progress());
    assert_eq!(state.lifecycle().operation, RequestSlot::Succeeded);
    // Saved-state is only re-asserted by an explicit follow-up.
    assert!(!state.lifecycle().is_saved);
}

#[test]
fn fetch_flags_rise_and_fall() {
    let state = StoreState::new().apply(&Event::FetchRequested);
    assert!(state.is_fetching());

    let state = state.apply(&Event::FetchFailed {
        error: "boom".to_string(),
    });
    assert!(!state.is_fetching());
    assert_eq!(state.error(), Some("boom"));

    // The slot is reusable; a new request clears the parked error.
    let state = state.apply(&Event::FetchRequested);
    assert!(state.is_fetching());
    assert_eq!(state.error(), None);
}

#[test]
fn selection_follows_its_own_events() {
    let state = fetched(&[1, 2])
        .apply(&Event::Select {
            entity: document(1, "A"),
        })
        .apply(&Event::Select {
            entity: document(2, "B"),
        })
        .apply(&Event::Deselect { id: 1.into() });

    assert_eq!(state.selected_ids(), &[EntityId::from(2)]);
    // The collection view is untouched by selection traffic.
    assert_eq!(state.ids(), &[EntityId::from(1), EntityId::from(2)]);

    let state = state.apply(&Event::ClearSelection);
    assert!(state.selected_ids().is_empty());
}

#[test]
fn a_realistic_session() {
    // fetch -> create -> rename -> delete one -> batch-delete the rest
    let state = StoreState::new()
        .apply(&Event::FetchRequested)
        .apply(&Event::FetchSucceeded {
            ids: vec![5145.into(), 5146.into()],
            entities: vec![
                document(5145, "Document_Library"),
                document(5146, "Calendar"),
            ],
        })
        .apply(&Event::CreateRequested)
        .apply(&Event::CreateSucceeded {
            entity: document(5147, "Memos"),
        })
        .apply(&Event::UpdateRequested)
        .apply(&Event::UpdateSucceeded {
            entity: document(5147, "Meeting memos"),
        })
        .apply(&Event::DeleteRequested)
        .apply(&Event::DeleteSucceeded {
            index: 0,
            id: 5145.into(),
        })
        .apply(&Event::BatchDeleteSucceeded {
            results: vec![5146.into()],
        });

    assert_eq!(state.ids(), &[EntityId::from(5147)]);
    assert_eq!(
        state.entity_by_id(&5147.into()).unwrap().field("DisplayName"),
        Some(&serde_json::json!("Meeting memos"))
    );
    assert!(!state.is_fetching());
    assert!(!state.lifecycle().is_operation_in_progress());
    assert_eq!(state.error(), None);
}
