//! Tests for the in-memory collaboration registry.

mod common;

use chrono::Utc;
use common::{pending_request, processed_request};
use creatorsite::models::collaboration::{
    CollaborationUpdate, ProcessOutcome, Registry, Status,
};

#[test]
fn test_insert_creates_pending_record() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));

    assert!(registry.exists("tok1"));
    let record = registry.get("tok1").expect("record should exist");
    assert_eq!(record.status, Status::Pending);
    assert!(record.processed_at.is_none());
    assert_eq!(record.brand, "Acme");
}

#[test]
fn test_get_unknown_token_returns_none() {
    let registry = Registry::new();
    assert!(registry.get("missing").is_none());
    assert!(!registry.exists("missing"));
}

#[test]
fn test_update_unknown_token_is_a_noop() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));

    let updated = registry.update(
        "missing",
        CollaborationUpdate { status: Some(Status::Success), ..Default::default() },
    );
    assert!(!updated);

    let counts = registry.counts();
    assert_eq!(counts.total, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.success, 0);
}

#[test]
fn test_delete_returns_whether_record_existed() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));

    assert!(!registry.delete("missing"));
    assert!(registry.delete("tok1"));
    assert!(!registry.delete("tok1"));
    assert!(!registry.exists("tok1"));
    assert_eq!(registry.counts().total, 0);
}

#[test]
fn test_update_merges_fields_and_leaves_rest_unchanged() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));

    let now = Utc::now();
    let updated = registry.update(
        "tok1",
        CollaborationUpdate {
            status: Some(Status::Success),
            processed_at: Some(now),
            ..Default::default()
        },
    );
    assert!(updated);

    let record = registry.get("tok1").expect("record should exist");
    assert_eq!(record.status, Status::Success);
    assert_eq!(record.processed_at, Some(now));
    // Untouched fields survive the merge.
    assert_eq!(record.brand, "Acme");
    assert_eq!(record.email, "acme@example.com");
    assert_eq!(record.budget, "$500");
    assert_eq!(record.message, "Let's collaborate on a video");
}

#[test]
fn test_update_single_field() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));

    registry.update(
        "tok1",
        CollaborationUpdate { brand: Some("Acme Corp".to_string()), ..Default::default() },
    );

    let record = registry.get("tok1").expect("record should exist");
    assert_eq!(record.brand, "Acme Corp");
    assert_eq!(record.status, Status::Pending);
    assert!(record.processed_at.is_none());
}

#[test]
fn test_insert_overwrites_on_token_collision() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "First"));
    registry.insert(pending_request("tok1", "Second"));

    assert_eq!(registry.counts().total, 1);
    assert_eq!(registry.get("tok1").expect("record").brand, "Second");
}

#[test]
fn test_list_all_orders_processed_before_pending() {
    let registry = Registry::new();
    registry.insert(pending_request("p1", "PendingOne"));
    registry.insert(processed_request("s1", "OldSuccess", Status::Success, 60));
    registry.insert(pending_request("p2", "PendingTwo"));
    registry.insert(processed_request("r1", "FreshReject", Status::Rejected, 5));

    let all = registry.list_all();
    assert_eq!(all.len(), 4);
    // Processed records first, newest processed_at first.
    assert_eq!(all[0].token, "r1");
    assert_eq!(all[1].token, "s1");
    // Pending records come last, in arbitrary relative order.
    assert!(all[2].processed_at.is_none());
    assert!(all[3].processed_at.is_none());
}

#[test]
fn test_list_all_never_yields_pending_before_processed() {
    let registry = Registry::new();
    for i in 0..10 {
        if i % 2 == 0 {
            registry.insert(pending_request(&format!("p{i}"), "Pending"));
        } else {
            registry.insert(processed_request(&format!("s{i}"), "Done", Status::Success, i));
        }
    }

    let all = registry.list_all();
    let first_pending = all.iter().position(|r| r.processed_at.is_none());
    if let Some(idx) = first_pending {
        assert!(
            all[idx..].iter().all(|r| r.processed_at.is_none()),
            "no processed record may follow a pending one"
        );
    }
}

#[test]
fn test_counts_consistent_with_list_all() {
    let registry = Registry::new();
    registry.insert(pending_request("a", "A"));
    registry.insert(pending_request("b", "B"));
    registry.insert(pending_request("c", "C"));
    registry.process("a", Status::Success);
    registry.process("b", Status::Rejected);
    registry.insert(pending_request("d", "D"));
    registry.delete("c");

    let counts = registry.counts();
    let all = registry.list_all();
    assert_eq!(counts.total, all.len());
    assert_eq!(counts.pending, all.iter().filter(|r| r.status == Status::Pending).count());
    assert_eq!(counts.success, all.iter().filter(|r| r.status == Status::Success).count());
    assert_eq!(counts.rejected, all.iter().filter(|r| r.status == Status::Rejected).count());
}

#[test]
fn test_process_applies_pending_transition() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));

    let outcome = registry.process("tok1", Status::Success);
    let ProcessOutcome::Applied(record) = outcome else {
        panic!("expected Applied, got {outcome:?}");
    };
    assert_eq!(record.status, Status::Success);
    assert!(record.processed_at.is_some());

    // The stored record reflects the transition too.
    let stored = registry.get("tok1").expect("record");
    assert_eq!(stored.status, Status::Success);
    assert!(stored.processed_at.is_some());
}

#[test]
fn test_process_unknown_token() {
    let registry = Registry::new();
    assert_eq!(registry.process("missing", Status::Rejected), ProcessOutcome::NotFound);
}

#[test]
fn test_process_refuses_second_transition() {
    let registry = Registry::new();
    registry.insert(pending_request("tok1", "Acme"));
    registry.process("tok1", Status::Success);

    let outcome = registry.process("tok1", Status::Rejected);
    assert_eq!(outcome, ProcessOutcome::AlreadyProcessed(Status::Success));

    // Terminal status is sticky.
    let record = registry.get("tok1").expect("record");
    assert_eq!(record.status, Status::Success);
}

#[test]
fn test_acme_submission_counts() {
    let registry = Registry::new();
    registry.insert(pending_request("tok_acme", "Acme"));

    let record = registry.get("tok_acme").expect("record");
    assert_eq!(record.status, Status::Pending);

    let counts = registry.counts();
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.total, 1);
}
