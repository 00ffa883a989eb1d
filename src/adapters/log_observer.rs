//! `log`-crate observer
//!
//! Forwards engine notifications to whatever logger the binary installed.
//! Per-event detail goes to `debug`, verdicts to `info`, skipped tickets to
//! `warn`.

use crate::core::errors::VerifyError;
use crate::core::models::{EventKind, ThreadRef, Ticket};
use crate::core::ports::EvaluationObserver;
use crate::core::services::ThreadEvaluation;

/// Observer that writes to the `log` facade
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    target: Option<String>,
}

impl LogObserver {
    /// Observer that names `status` as the destination of approved tickets
    pub fn with_target(status: impl Into<String>) -> Self {
        Self {
            target: Some(status.into()),
        }
    }

    fn move_advice(&self, ticket: &Ticket) -> String {
        match &self.target {
            Some(status) => format!(
                "Ticket {} (current status {}) should be moved to {status}",
                ticket.id, ticket.status
            ),
            None => format!(
                "Ticket {} (current status {}) should be moved",
                ticket.id, ticket.status
            ),
        }
    }
}

impl EvaluationObserver for LogObserver {
    fn approval_added(&self, author: &str, kind: EventKind) {
        log::debug!("{author} approved via {kind}");
    }

    fn approval_withdrawn(&self, author: &str, kind: EventKind, was_active: bool) {
        if was_active {
            log::debug!("{author} withdrew approval via {kind}");
        } else {
            log::debug!("{author} cancelled via {kind} without an active approval");
        }
    }

    fn qualified_approver(&self, identity: &str) {
        log::debug!("QA contact assigned: {identity}");
    }

    fn verdict(&self, ticket: &Ticket, thread: &ThreadRef, evaluation: &ThreadEvaluation) {
        match &evaluation.approved_by {
            Some(contact) => {
                log::info!("QA contact {contact} approved {thread}");
                log::info!("{}", self.move_advice(ticket));
            },
            None => log::info!(
                "Ticket {} (current status {}) not approved by QA contact on {thread}",
                ticket.id,
                ticket.status
            ),
        }
    }

    fn ticket_failed(&self, error: &VerifyError) {
        log::warn!("{error}");
    }
}
