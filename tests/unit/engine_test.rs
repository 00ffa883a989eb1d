//! Approval engine behavior: extraction, replay and verdict

use qa_verify::core::models::{Comment, Review, ReviewState, replay_order};
use qa_verify::core::ports::NullObserver;
use qa_verify::core::services::{
    ApprovalTracker, Classifier, evaluate_thread, qualified_approvers, replay,
};

use crate::common::fixtures::{ThreadBuilder, approve, assignment, cancel, review};
use crate::common::mocks::RecordingObserver;

fn approvals(thread: (Vec<Comment>, Vec<Review>)) -> Vec<String> {
    let (comments, reviews) = thread;
    replay(Classifier::standard(), &comments, &reviews, &NullObserver).to_vec()
}

// =============================================================================
// REPLAY
// =============================================================================

#[test]
fn test_cancel_then_reapprove() {
    let thread = ThreadBuilder::new().approve("a").cancel("a").approve("a").build();
    assert_eq!(approvals(thread), vec!["a"]);
}

#[test]
fn test_cancel_without_prior_approval() {
    let thread = ThreadBuilder::new().cancel("a").build();
    assert!(approvals(thread).is_empty());
}

#[test]
fn test_same_approve_twice() {
    let thread = ThreadBuilder::new().approve("a").approve("a").build();
    assert_eq!(approvals(thread), vec!["a"]);
}

#[test]
fn test_changes_requested_removes_approval() {
    let thread = ThreadBuilder::new()
        .approve("alice")
        .review("alice", ReviewState::ChangesRequested, "great work, one nit")
        .build();
    assert!(approvals(thread).is_empty());
}

#[test]
fn test_review_states_that_do_nothing() {
    let thread = ThreadBuilder::new()
        .approve("alice")
        .review("alice", ReviewState::Commented, "hmm")
        .review("alice", ReviewState::Other, "")
        .build();
    assert_eq!(approvals(thread), vec!["alice"]);
}

#[test]
fn test_tracker_step_by_step() {
    let classifier = Classifier::standard();
    let mut tracker = ApprovalTracker::new(classifier, &NullObserver);
    let comments = vec![approve("a"), approve("b"), cancel("a")];
    let reviews = vec![review("c", ReviewState::Approved)];

    let mut sizes = Vec::new();
    for event in replay_order(&comments, &reviews) {
        tracker.apply(event);
        sizes.push(tracker.approvals().len());
    }
    assert_eq!(sizes, vec![1, 2, 1, 2]);
    assert_eq!(tracker.finish().to_vec(), vec!["b", "c"]);
}

// =============================================================================
// EXTRACTION
// =============================================================================

#[test]
fn test_extract_from_announcement() {
    let comments = vec![assignment("alice")];
    assert_eq!(qualified_approvers(Classifier::standard(), &comments).to_vec(), vec!["alice"]);
}

#[test]
fn test_extract_nothing_without_at() {
    let (comments, _) = ThreadBuilder::new()
        .comment("robot", "Requesting review from QA contact: /cc alice")
        .build();
    assert!(qualified_approvers(Classifier::standard(), &comments).is_empty());
}

// =============================================================================
// END TO END
// =============================================================================

#[test]
fn test_qualified_approval_counts() {
    let (comments, _) =
        ThreadBuilder::new().assign("alice").approve("bob").approve("alice").build();
    let eval = evaluate_thread(Classifier::standard(), &comments, &[], &NullObserver);

    assert_eq!(eval.approvals, vec!["bob", "alice"]);
    assert_eq!(eval.qualified, vec!["alice"]);
    assert!(eval.approved);
}

#[test]
fn test_retracted_approval_does_not_count() {
    let (comments, _) =
        ThreadBuilder::new().assign("alice").approve("alice").cancel("alice").build();
    let eval = evaluate_thread(Classifier::standard(), &comments, &[], &NullObserver);

    assert!(eval.approvals.is_empty());
    assert!(!eval.approved);
    assert_eq!(eval.approved_by, None);
}

#[test]
fn test_multiple_contacts_any_one_suffices() {
    let (comments, _) = ThreadBuilder::new().assign("alice").assign("bob").approve("bob").build();
    let eval = evaluate_thread(Classifier::standard(), &comments, &[], &NullObserver);

    assert_eq!(eval.qualified, vec!["alice", "bob"]);
    assert_eq!(eval.approved_by.as_deref(), Some("bob"));
}

#[test]
fn test_empty_input_is_not_approved() {
    let eval = evaluate_thread(Classifier::standard(), &[], &[], &NullObserver);
    assert!(!eval.approved);
}

#[test]
fn test_observer_sees_replay() {
    let (comments, reviews) = ThreadBuilder::new()
        .assign("alice")
        .cancel("alice")
        .approve("alice")
        .review("alice", ReviewState::ChangesRequested, "")
        .build();
    let observer = RecordingObserver::default();
    let eval = evaluate_thread(Classifier::standard(), &comments, &reviews, &observer);

    assert!(!eval.approved);
    assert_eq!(
        observer.events(),
        vec![
            "qa alice",
            "-alice (comment, active=false)",
            "+alice (comment)",
            "-alice (review, active=true)",
        ]
    );
}
