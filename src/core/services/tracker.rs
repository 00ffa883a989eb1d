//! Approval state tracker - replays a thread and keeps the active approvals
//!
//! Replay is strictly sequential: a cancel only removes an approval that was
//! recorded by an earlier event.

use crate::core::models::{ApprovalSet, Comment, Event, EventKind, Review, ReviewState};
use crate::core::ports::EvaluationObserver;

use super::classifier::{Classification, Classifier};

/// What a single event did to the approval set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalEffect {
    /// The author now approves (possibly already did)
    Approved,
    /// The author's approval was withdrawn (possibly had none)
    Withdrawn,
    /// The event does not touch approvals
    Unchanged,
}

/// Running approval state for one thread
pub struct ApprovalTracker<'a> {
    classifier: &'a Classifier,
    observer: &'a dyn EvaluationObserver,
    approvals: ApprovalSet,
}

impl std::fmt::Debug for ApprovalTracker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApprovalTracker").field("approvals", &self.approvals).finish()
    }
}

impl<'a> ApprovalTracker<'a> {
    /// Start with nobody approving
    pub fn new(classifier: &'a Classifier, observer: &'a dyn EvaluationObserver) -> Self {
        Self {
            classifier,
            observer,
            approvals: ApprovalSet::new(),
        }
    }

    /// Apply a comment
    ///
    /// Only approve and cancel commands matter here. Assignment
    /// announcements are left to the extractor.
    pub fn apply_comment(&mut self, comment: &Comment) -> ApprovalEffect {
        match self.classifier.classify(&comment.body) {
            Classification::ApproveCommand => self.approve(&comment.author, EventKind::Comment),
            Classification::CancelCommand => self.withdraw(&comment.author, EventKind::Comment),
            Classification::AssignmentAnnouncement { .. } | Classification::Inert => {
                ApprovalEffect::Unchanged
            },
        }
    }

    /// Apply a formal review
    ///
    /// An approved state or an approve command in the body approves. A
    /// changes-requested state or a cancel command withdraws, whatever else
    /// the body says.
    pub fn apply_review(&mut self, review: &Review) -> ApprovalEffect {
        if review.state == ReviewState::Approved || self.classifier.is_approve(&review.body) {
            return self.approve(&review.author, EventKind::Review);
        }
        if review.state == ReviewState::ChangesRequested || self.classifier.is_cancel(&review.body)
        {
            return self.withdraw(&review.author, EventKind::Review);
        }
        ApprovalEffect::Unchanged
    }

    /// Apply any event
    pub fn apply(&mut self, event: Event<'_>) -> ApprovalEffect {
        match event {
            Event::Comment(comment) => self.apply_comment(comment),
            Event::Review(review) => self.apply_review(review),
        }
    }

    /// Current approvals
    #[must_use]
    pub const fn approvals(&self) -> &ApprovalSet {
        &self.approvals
    }

    /// Finish replay and hand back the approvals
    #[must_use]
    pub fn finish(self) -> ApprovalSet {
        self.approvals
    }

    fn approve(&mut self, author: &str, kind: EventKind) -> ApprovalEffect {
        self.approvals.add(author);
        self.observer.approval_added(author, kind);
        ApprovalEffect::Approved
    }

    fn withdraw(&mut self, author: &str, kind: EventKind) -> ApprovalEffect {
        let was_active = self.approvals.remove(author);
        self.observer.approval_withdrawn(author, kind, was_active);
        ApprovalEffect::Withdrawn
    }
}

/// Replay comments then reviews and return the approvals left standing
#[must_use]
pub fn replay(
    classifier: &Classifier,
    comments: &[Comment],
    reviews: &[Review],
    observer: &dyn EvaluationObserver,
) -> ApprovalSet {
    let mut tracker = ApprovalTracker::new(classifier, observer);
    for event in crate::core::models::replay_order(comments, reviews) {
        tracker.apply(event);
    }
    tracker.finish()
}
