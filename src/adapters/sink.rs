//! Verdict sinks
//!
//! - [`DryRunSink`] - only logs what would happen (the default)
//! - [`RecordingSink`] - keeps every verdict in memory
//! - [`StatusTransitionSink`] - moves approved tickets to a new status

use std::sync::Mutex;

use crate::core::models::{ThreadRef, Ticket, TicketId};
use crate::core::ports::{TicketTracker, VerdictSink};
use crate::core::services::ThreadEvaluation;

/// Sink that changes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSink;

impl VerdictSink for DryRunSink {
    fn record(
        &self,
        ticket: &Ticket,
        _thread: &ThreadRef,
        evaluation: &ThreadEvaluation,
    ) -> anyhow::Result<()> {
        if evaluation.approved {
            log::debug!("dry run: leaving ticket {} in {}", ticket.id, ticket.status);
        }
        Ok(())
    }
}

/// Sink that remembers `(ticket, approved)` for every verdict
#[derive(Debug, Default)]
pub struct RecordingSink {
    verdicts: Mutex<Vec<(TicketId, bool)>>,
}

impl RecordingSink {
    /// Create an empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verdicts recorded so far, in order
    pub fn verdicts(&self) -> anyhow::Result<Vec<(TicketId, bool)>> {
        let verdicts = self
            .verdicts
            .lock()
            .map_err(|_| anyhow::anyhow!("verdict log lock poisoned"))?;
        Ok(verdicts.clone())
    }
}

impl VerdictSink for RecordingSink {
    fn record(
        &self,
        ticket: &Ticket,
        _thread: &ThreadRef,
        evaluation: &ThreadEvaluation,
    ) -> anyhow::Result<()> {
        self.verdicts
            .lock()
            .map_err(|_| anyhow::anyhow!("verdict log lock poisoned"))?
            .push((ticket.id, evaluation.approved));
        Ok(())
    }
}

/// Sink that moves approved tickets to `status`
///
/// Tickets already in `status` are left alone. Unapproved tickets are never
/// touched.
pub struct StatusTransitionSink<'a> {
    tracker: &'a dyn TicketTracker,
    status: String,
}

impl std::fmt::Debug for StatusTransitionSink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusTransitionSink")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl<'a> StatusTransitionSink<'a> {
    /// Create a sink that updates tickets through `tracker`
    pub fn new(tracker: &'a dyn TicketTracker, status: impl Into<String>) -> Self {
        Self {
            tracker,
            status: status.into(),
        }
    }
}

impl VerdictSink for StatusTransitionSink<'_> {
    fn record(
        &self,
        ticket: &Ticket,
        _thread: &ThreadRef,
        evaluation: &ThreadEvaluation,
    ) -> anyhow::Result<()> {
        if !evaluation.approved || ticket.status == self.status {
            return Ok(());
        }
        log::info!("Moving ticket {} from {} to {}", ticket.id, ticket.status, self.status);
        self.tracker.update_status(ticket.id, &self.status)
    }
}
