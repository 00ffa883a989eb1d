//! Batch verification with hand-written mocks

use qa_verify::adapters::{RecordingSink, StatusTransitionSink};
use qa_verify::core::errors::VerifyError;
use qa_verify::core::models::{ReviewState, TicketId};
use qa_verify::core::ports::NullObserver;
use qa_verify::core::services::Verifier;

use crate::common::fixtures::ThreadBuilder;
use crate::common::mocks::{MockSource, MockTracker, RecordingObserver};

fn approved_by_alice() -> ThreadBuilder {
    ThreadBuilder::new().assign("alice").approve("alice")
}

// =============================================================================
// PARTIAL FAILURE
// =============================================================================

#[test]
fn test_unparsable_id_then_success() {
    let tracker = MockTracker::new().with_ticket(2, "openshift", "origin", 100);
    let source = MockSource::new().with_thread(100, approved_by_alice().build());
    let sink = RecordingSink::new();

    let report = Verifier::new(&tracker, &source, &false, &sink)
        .verify_tickets(&["1x", "2"], &NullObserver);

    assert_eq!(report.errors.len(), 1);
    assert!(
        report.errors[0]
            .to_string()
            .starts_with("failed to convert ticket id `1x` to integer")
    );
    assert_eq!(report.outcomes.len(), 1);
    assert!(report.outcomes[0].evaluation.approved);
    assert_eq!(sink.verdicts().unwrap(), vec![(TicketId(2), true)]);
}

#[test]
fn test_every_failure_kind_is_collected() {
    let tracker = MockTracker::new()
        .with_ticket(1, "o", "r", 10)
        .with_unlinked_ticket(2)
        .with_ticket(3, "o", "r", 30)
        .failing_links_for(3)
        .with_ticket(4, "o", "r", 40)
        .with_ticket(5, "o", "r", 50);
    let source = MockSource::new()
        .with_thread(10, approved_by_alice().build())
        .with_thread(50, approved_by_alice().build())
        .failing_reviews_for(50);
    let sink = RecordingSink::new();

    let report = Verifier::new(&tracker, &source, &true, &sink)
        .verify_tickets(&["1", "2", "3", "4", "5", "abc"], &NullObserver);

    let messages: Vec<String> = report.errors.iter().map(ToString::to_string).collect();
    assert_eq!(messages.len(), 5);
    assert_eq!(messages[0], "failed to identify associated thread for ticket `2`");
    assert_eq!(messages[1], "failed to get external links for ticket `3`: tracker timed out");
    assert!(messages[2].starts_with("failed to convert ticket id `abc`"));
    assert_eq!(
        messages[3],
        "unable to retrieve comments for thread `o/r#40`: pull o/r#40 not found"
    );
    assert_eq!(messages[4], "unable to retrieve reviews for thread `o/r#50`: secondary rate limit");

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].ticket.id, TicketId(1));
}

#[test]
fn test_failures_reach_observer() {
    let tracker = MockTracker::new().with_unlinked_ticket(9);
    let source = MockSource::new();
    let sink = RecordingSink::new();
    let observer = RecordingObserver::default();

    let report = Verifier::new(&tracker, &source, &false, &sink).verify_tickets(&["9"], &observer);

    assert!(matches!(report.errors[0], VerifyError::NoThread { .. }));
    assert_eq!(
        observer.events(),
        vec!["failed failed to identify associated thread for ticket `9`"]
    );
}

// =============================================================================
// REVIEW POLICY
// =============================================================================

#[test]
fn test_review_approval_only_counts_when_enabled() {
    let thread = ThreadBuilder::new()
        .assign("alice")
        .review("alice", ReviewState::Approved, "")
        .build();
    let tracker = MockTracker::new().with_ticket(1, "o", "r", 10);
    let source = MockSource::new().with_thread(10, thread);
    let sink = RecordingSink::new();

    let off = Verifier::new(&tracker, &source, &false, &sink).verify_tickets(&["1"], &NullObserver);
    assert!(!off.outcomes[0].evaluation.approved);
    assert!(off.outcomes[0].evaluation.approvals.is_empty());
    assert_eq!(source.review_calls(), 0);

    let on = Verifier::new(&tracker, &source, &true, &sink).verify_tickets(&["1"], &NullObserver);
    assert!(on.outcomes[0].evaluation.approved);
    assert_eq!(source.review_calls(), 1);
}

// =============================================================================
// VERDICT SINK
// =============================================================================

#[test]
fn test_transition_sink_moves_only_approved() {
    let tracker = MockTracker::new()
        .with_ticket(1, "o", "r", 10)
        .with_ticket(2, "o", "r", 20);
    let source = MockSource::new()
        .with_thread(10, approved_by_alice().build())
        .with_thread(20, ThreadBuilder::new().assign("alice").approve("bob").build());
    let sink = StatusTransitionSink::new(&tracker, "VERIFIED");

    let report =
        Verifier::new(&tracker, &source, &false, &sink).verify_tickets(&["1", "2"], &NullObserver);

    assert!(report.is_complete());
    assert_eq!(report.approved().count(), 1);
    assert_eq!(tracker.updates(), vec![(TicketId(1), "VERIFIED".to_string())]);
}

#[test]
fn test_custom_link_host() {
    let tracker = MockTracker::new().with_ticket(1, "o", "r", 10);
    let source = MockSource::new().with_thread(10, approved_by_alice().build());
    let sink = RecordingSink::new();

    let report = Verifier::new(&tracker, &source, &false, &sink)
        .with_link_host("https://gitlab.example.com/")
        .verify_tickets(&["1"], &NullObserver);

    assert!(report.outcomes.is_empty());
    assert!(matches!(report.errors[0], VerifyError::NoThread { ticket: TicketId(1) }));
}
