//! Discussion events
//!
//! A review thread carries two kinds of entries: plain comments and formal
//! reviews. Both have an author and a free-text body; reviews also carry a
//! state chosen by the reviewer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plain comment on a review thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Login of the comment author
    pub author: String,

    /// Comment text
    #[serde(default)]
    pub body: String,

    /// When the comment was created, if the source reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Create a comment without a timestamp
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            created_at: None,
        }
    }
}

/// State a reviewer attached to a formal review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Reviewer approved the change
    Approved,
    /// Reviewer asked for changes
    ChangesRequested,
    /// Reviewer left a comment-only review
    Commented,
    /// Anything else (pending, dismissed, ...)
    #[default]
    #[serde(other)]
    Other,
}

impl std::fmt::Display for ReviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::ChangesRequested => write!(f, "changes-requested"),
            Self::Commented => write!(f, "commented"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A formal review on a review thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Login of the reviewer
    pub author: String,

    /// Review summary text (often empty)
    #[serde(default)]
    pub body: String,

    /// State chosen by the reviewer
    #[serde(default)]
    pub state: ReviewState,

    /// When the review was submitted, if the source reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Review {
    /// Create a review without a timestamp
    pub fn new(author: impl Into<String>, state: ReviewState, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            state,
            created_at: None,
        }
    }
}

/// Kind of a discussion event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Plain comment
    Comment,
    /// Formal review
    Review,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comment => write!(f, "comment"),
            Self::Review => write!(f, "review"),
        }
    }
}

/// A borrowed view of one entry in a thread's event log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// A plain comment
    Comment(&'a Comment),
    /// A formal review
    Review(&'a Review),
}

impl<'a> Event<'a> {
    /// Author login
    #[must_use]
    pub fn author(&self) -> &'a str {
        match *self {
            Self::Comment(c) => &c.author,
            Self::Review(r) => &r.author,
        }
    }

    /// Whether this is a comment or a review
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Comment(_) => EventKind::Comment,
            Self::Review(_) => EventKind::Review,
        }
    }
}

/// Lay out a thread's events in replay order: every comment, then every review.
///
/// The two lists come from separate retrievals, so comments are replayed
/// before reviews even when a review was submitted earlier.
pub fn replay_order<'a>(
    comments: &'a [Comment],
    reviews: &'a [Review],
) -> impl Iterator<Item = Event<'a>> {
    comments.iter().map(Event::Comment).chain(reviews.iter().map(Event::Review))
}
