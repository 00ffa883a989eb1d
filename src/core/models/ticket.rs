//! Tickets and the review threads linked to them

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a tracking ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub i64);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = ParseIntError;

    /// Parses the raw identifier exactly as given; surrounding whitespace is
    /// rejected like any other non-digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A tracking ticket as reported by the ticket tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket identifier
    pub id: TicketId,

    /// Current status (e.g. `ON_QA`)
    #[serde(default)]
    pub status: String,
}

/// A status transition applied to a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Ticket that moved
    pub ticket: TicketId,
    /// Status before the move
    pub from: String,
    /// Status after the move
    pub to: String,
}

/// A link from a ticket to a record in some external tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Base URL identifying the kind of external tracker
    pub tracker_url: String,

    /// Owning organization
    pub org: String,

    /// Repository within the organization
    pub repo: String,

    /// Record number within the repository
    pub number: u64,
}

impl ExternalLink {
    /// Thread this link points at
    #[must_use]
    pub fn thread(&self) -> ThreadRef {
        ThreadRef {
            org: self.org.clone(),
            repo: self.repo.clone(),
            number: self.number,
        }
    }
}

/// Location of a review thread: `org/repo#number`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThreadRef {
    /// Owning organization
    pub org: String,
    /// Repository within the organization
    pub repo: String,
    /// Thread number within the repository
    pub number: u64,
}

impl ThreadRef {
    /// Create a thread reference
    pub fn new(org: impl Into<String>, repo: impl Into<String>, number: u64) -> Self {
        Self {
            org: org.into(),
            repo: repo.into(),
            number,
        }
    }
}

impl fmt::Display for ThreadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.org, self.repo, self.number)
    }
}
