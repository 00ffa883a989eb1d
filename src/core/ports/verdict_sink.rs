//! Verdict sink port
//!
//! Where a ticket's verdict goes once its thread has been evaluated. This is
//! the hook for acting on an approval, e.g. moving the ticket to VERIFIED.

use crate::core::models::{ThreadRef, Ticket};
use crate::core::services::ThreadEvaluation;

/// Receives every computed verdict
#[cfg_attr(test, mockall::automock)]
pub trait VerdictSink: Send + Sync {
    /// Handle the evaluation of `ticket`'s thread
    fn record(
        &self,
        ticket: &Ticket,
        thread: &ThreadRef,
        evaluation: &ThreadEvaluation,
    ) -> anyhow::Result<()>;
}
