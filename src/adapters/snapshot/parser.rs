//! Snapshot file format
//!
//! A snapshot is a JSON document holding tickets (with their external links)
//! and review threads (with their comments and reviews):
//!
//! ```json
//! {
//!   "tickets": [
//!     { "id": 1801, "status": "ON_QA",
//!       "links": [ { "tracker_url": "https://github.com/", "org": "openshift",
//!                    "repo": "origin", "number": 24150 } ] }
//!   ],
//!   "threads": [
//!     { "org": "openshift", "repo": "origin", "number": 24150,
//!       "comments": [ { "author": "alice", "body": "/lgtm" } ],
//!       "reviews": [ { "author": "bob", "state": "APPROVED" } ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{Comment, ExternalLink, Review, ThreadRef, TicketId};

/// Whole snapshot document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    /// Tickets known to the snapshot
    #[serde(default)]
    pub tickets: Vec<TicketEntry>,
    /// Review threads known to the snapshot
    #[serde(default)]
    pub threads: Vec<ThreadEntry>,
}

/// A ticket record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketEntry {
    /// Ticket identifier
    pub id: TicketId,
    /// Current status
    #[serde(default)]
    pub status: String,
    /// External links attached to the ticket
    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

/// A review thread record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadEntry {
    /// Where the thread lives
    #[serde(flatten)]
    pub thread: ThreadRef,
    /// What was said on it
    #[serde(flatten)]
    pub log: ThreadLog,
}

/// Comments and reviews of one thread
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadLog {
    /// Plain comments
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Formal reviews
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl ThreadLog {
    /// Put both lists in creation order
    ///
    /// A list is only reordered when every entry carries a timestamp;
    /// otherwise the order in the file is taken as creation order.
    pub fn sort_chronologically(&mut self) {
        sort_if_dated(&mut self.comments, |c| c.created_at);
        sort_if_dated(&mut self.reviews, |r| r.created_at);
    }
}

fn sort_if_dated<T>(items: &mut [T], created_at: impl Fn(&T) -> Option<DateTime<Utc>>) {
    if items.iter().all(|item| created_at(item).is_some()) {
        items.sort_by_key(created_at);
    }
}

/// Parse a snapshot document
pub fn parse_snapshot(content: &str) -> anyhow::Result<SnapshotFile> {
    let mut snapshot: SnapshotFile = serde_json::from_str(content)?;
    for entry in &mut snapshot.threads {
        entry.log.sort_chronologically();
    }
    Ok(snapshot)
}

/// Read and parse a snapshot file
pub fn load_snapshot(path: &Path) -> anyhow::Result<SnapshotFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    parse_snapshot(&content).with_context(|| format!("parsing snapshot {}", path.display()))
}

/// Read and parse a single-thread file (`{"comments": [...], "reviews": [...]}`)
pub fn load_thread_log(path: &Path) -> anyhow::Result<ThreadLog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading thread {}", path.display()))?;
    let mut log: ThreadLog = serde_json::from_str(&content)
        .with_context(|| format!("parsing thread {}", path.display()))?;
    log.sort_chronologically();
    Ok(log)
}
