//! Discussion source port
//!
//! Defines the interface for reading a review thread's history.

use crate::core::models::{Comment, Review, ThreadRef};

/// Source of review-thread events
///
/// Both lists must come back complete and in creation order.
#[cfg_attr(test, mockall::automock)]
pub trait DiscussionSource: Send + Sync {
    /// All comments on the thread
    fn comments(&self, thread: &ThreadRef) -> anyhow::Result<Vec<Comment>>;

    /// All formal reviews on the thread
    fn reviews(&self, thread: &ThreadRef) -> anyhow::Result<Vec<Review>>;
}
