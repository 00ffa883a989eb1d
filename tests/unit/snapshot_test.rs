//! Snapshot adapter driven through the verifier

use std::fs;

use qa_verify::adapters::snapshot::load_thread_log;
use qa_verify::adapters::{RecordingSink, SnapshotStore};
use qa_verify::core::models::{ThreadRef, TicketId};
use qa_verify::core::ports::{DiscussionSource, NullObserver, TicketTracker};
use qa_verify::core::services::Verifier;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
  "tickets": [
    { "id": 1801, "status": "ON_QA", "links": [
        { "tracker_url": "https://bugzilla.example.com/", "org": "x", "repo": "y", "number": 1 },
        { "tracker_url": "https://github.com/", "org": "openshift", "repo": "origin",
          "number": 24150 }
    ] },
    { "id": 1802, "status": "ON_QA", "links": [] }
  ],
  "threads": [
    { "org": "openshift", "repo": "origin", "number": 24150,
      "comments": [
        { "author": "openshift-ci-robot", "body": "Requesting review from QA contact:\n/cc @qe1",
          "created_at": "2020-01-01T10:00:00Z" },
        { "author": "qe1", "body": "/lgtm", "created_at": "2020-01-03T10:00:00Z" },
        { "author": "qe1", "body": "/lgtm cancel", "created_at": "2020-01-02T10:00:00Z" }
      ],
      "reviews": [ { "author": "dev2", "state": "APPROVED" } ] }
  ]
}"#;

fn write_snapshot(temp: &TempDir) -> std::path::PathBuf {
    let path = temp.path().join("snapshot.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

#[test]
fn test_store_serves_snapshot() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::load(&write_snapshot(&temp)).unwrap();

    assert_eq!(store.ticket(TicketId(1801)).unwrap().status, "ON_QA");
    assert_eq!(store.external_links(TicketId(1801)).unwrap().len(), 2);

    let comments = store.comments(&ThreadRef::new("openshift", "origin", 24150)).unwrap();
    let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
    // Dated comments come back in creation order, not file order
    assert_eq!(bodies[1], "/lgtm cancel");
    assert_eq!(bodies[2], "/lgtm");
}

#[test]
fn test_verify_against_snapshot() {
    let temp = TempDir::new().unwrap();
    let store = SnapshotStore::load(&write_snapshot(&temp)).unwrap();
    let sink = RecordingSink::new();

    let report = Verifier::new(&store, &store, &false, &sink)
        .verify_tickets(&["1801", "1802"], &NullObserver);

    assert_eq!(report.outcomes.len(), 1);
    let outcome = &report.outcomes[0];
    assert_eq!(outcome.thread.to_string(), "openshift/origin#24150");
    assert!(outcome.evaluation.approved);
    assert_eq!(outcome.evaluation.approved_by.as_deref(), Some("qe1"));

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].ticket(), Some(TicketId(1802)));
}

#[test]
fn test_malformed_snapshot_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{\"tickets\": [").unwrap();

    let err = SnapshotStore::load(&path).unwrap_err();
    assert!(format!("{err:#}").starts_with("parsing snapshot"));
}

#[test]
fn test_load_thread_log() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("thread.json");
    fs::write(&path, r#"{"comments":[{"author":"a","body":"/lgtm"}]}"#).unwrap();

    let log = load_thread_log(&path).unwrap();
    assert_eq!(log.comments.len(), 1);
    assert!(log.reviews.is_empty());
}
