//! Verdict computation for a single thread

use serde::Serialize;

use crate::core::models::{ApprovalSet, Comment, QualifiedApprovers, Review};
use crate::core::ports::EvaluationObserver;

use super::classifier::Classifier;
use super::extractor::qualified_approvers;
use super::tracker::replay;

/// Outcome of evaluating one thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadEvaluation {
    /// Active approvals after replay, in approval order
    pub approvals: Vec<String>,
    /// Qualified approvers, sorted
    pub qualified: Vec<String>,
    /// First active approver who is also qualified
    pub approved_by: Option<String>,
    /// Whether a qualified approver approved
    pub approved: bool,
}

/// Whether any active approver is qualified
///
/// Always false when either set is empty.
#[must_use]
pub fn verdict(approvals: &ApprovalSet, qualified: &QualifiedApprovers) -> bool {
    approvals.first_qualified(qualified).is_some()
}

/// Evaluate a thread from its comments and (already filtered) reviews
///
/// Pass an empty `reviews` slice when formal reviews do not count as
/// approval for the thread's destination.
#[must_use]
pub fn evaluate_thread(
    classifier: &Classifier,
    comments: &[Comment],
    reviews: &[Review],
    observer: &dyn EvaluationObserver,
) -> ThreadEvaluation {
    let qualified = qualified_approvers(classifier, comments);
    for identity in qualified.iter() {
        observer.qualified_approver(identity);
    }

    let approvals = replay(classifier, comments, reviews, observer);
    let approved_by = approvals.first_qualified(&qualified).map(str::to_string);

    ThreadEvaluation {
        approvals: approvals.to_vec(),
        qualified: qualified.to_vec(),
        approved: approved_by.is_some(),
        approved_by,
    }
}
