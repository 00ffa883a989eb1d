//! Reviewer extractor - finds the QA contacts assigned on a thread

use crate::core::models::{Comment, QualifiedApprovers};

use super::classifier::{Classification, Classifier};

/// Collect every identity named by an assignment announcement
///
/// Comments are classified with the same precedence the tracker uses, so a
/// comment that reads as an approve or cancel command never contributes an
/// assignment. A thread without any announcement yields an empty set, which
/// means no approval on it can ever count.
#[must_use]
pub fn qualified_approvers(classifier: &Classifier, comments: &[Comment]) -> QualifiedApprovers {
    comments
        .iter()
        .filter_map(|comment| match classifier.classify(&comment.body) {
            Classification::AssignmentAnnouncement { approver } => approver,
            _ => None,
        })
        .collect()
}
