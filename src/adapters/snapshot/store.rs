//! Snapshot-backed ticket tracker and discussion source
//!
//! Implements [`TicketTracker`] and [`DiscussionSource`] over a
//! [`SnapshotFile`] held in memory. Status updates are kept in memory too and
//! can be read back with [`SnapshotStore::status_updates`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::core::models::{
    Comment, ExternalLink, Review, StatusChange, ThreadRef, Ticket, TicketId,
};
use crate::core::ports::{DiscussionSource, TicketTracker};

use super::parser::{SnapshotFile, ThreadLog, TicketEntry, load_snapshot};

/// In-memory store loaded from a snapshot
#[derive(Debug, Default)]
pub struct SnapshotStore {
    tickets: HashMap<TicketId, TicketEntry>,
    threads: HashMap<ThreadRef, ThreadLog>,
    changes: Mutex<Vec<StatusChange>>,
}

impl SnapshotStore {
    /// Build a store from a parsed snapshot
    ///
    /// Later entries for the same ticket or thread replace earlier ones.
    #[must_use]
    pub fn new(snapshot: SnapshotFile) -> Self {
        Self {
            tickets: snapshot.tickets.into_iter().map(|t| (t.id, t)).collect(),
            threads: snapshot.threads.into_iter().map(|t| (t.thread, t.log)).collect(),
            changes: Mutex::new(Vec::new()),
        }
    }

    /// Load a snapshot file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(load_snapshot(path)?))
    }

    /// Status changes applied through [`TicketTracker::update_status`], in order
    pub fn status_updates(&self) -> anyhow::Result<Vec<StatusChange>> {
        Ok(self.lock_changes()?.clone())
    }

    fn entry(&self, id: TicketId) -> anyhow::Result<&TicketEntry> {
        self.tickets
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("ticket {id} not found in snapshot"))
    }

    fn thread(&self, thread: &ThreadRef) -> anyhow::Result<&ThreadLog> {
        self.threads
            .get(thread)
            .ok_or_else(|| anyhow::anyhow!("thread {thread} not found in snapshot"))
    }

    fn lock_changes(&self) -> anyhow::Result<MutexGuard<'_, Vec<StatusChange>>> {
        self.changes.lock().map_err(|_| anyhow::anyhow!("status log lock poisoned"))
    }

    fn current_status(&self, id: TicketId, entry: &TicketEntry) -> anyhow::Result<String> {
        Ok(self
            .lock_changes()?
            .iter()
            .rev()
            .find(|change| change.ticket == id)
            .map_or_else(|| entry.status.clone(), |change| change.to.clone()))
    }
}

impl TicketTracker for SnapshotStore {
    fn ticket(&self, id: TicketId) -> anyhow::Result<Ticket> {
        let entry = self.entry(id)?;
        let status = self.current_status(id, entry)?;
        Ok(Ticket { id, status })
    }

    fn external_links(&self, id: TicketId) -> anyhow::Result<Vec<ExternalLink>> {
        Ok(self.entry(id)?.links.clone())
    }

    fn update_status(&self, id: TicketId, status: &str) -> anyhow::Result<()> {
        let from = self.current_status(id, self.entry(id)?)?;
        self.lock_changes()?.push(StatusChange {
            ticket: id,
            from,
            to: status.to_string(),
        });
        Ok(())
    }
}

impl DiscussionSource for SnapshotStore {
    fn comments(&self, thread: &ThreadRef) -> anyhow::Result<Vec<Comment>> {
        Ok(self.thread(thread)?.comments.clone())
    }

    fn reviews(&self, thread: &ThreadRef) -> anyhow::Result<Vec<Review>> {
        Ok(self.thread(thread)?.reviews.clone())
    }
}
