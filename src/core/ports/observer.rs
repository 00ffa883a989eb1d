//! Evaluation observer port
//!
//! The engine reports what it does through this trait instead of a global
//! logger. Every method has a no-op default, so implementors only override
//! what they care about.

use crate::core::errors::VerifyError;
use crate::core::models::{EventKind, ThreadRef, Ticket};
use crate::core::services::ThreadEvaluation;

/// Receives progress notifications from the engine and the batch verifier
pub trait EvaluationObserver {
    /// `author` gained an active approval from an event of `kind`
    fn approval_added(&self, author: &str, kind: EventKind) {
        let _ = (author, kind);
    }

    /// `author` withdrew approval; `was_active` is false when there was
    /// nothing to withdraw
    fn approval_withdrawn(&self, author: &str, kind: EventKind, was_active: bool) {
        let _ = (author, kind, was_active);
    }

    /// An assignment announcement named `identity`
    fn qualified_approver(&self, identity: &str) {
        let _ = identity;
    }

    /// A ticket's thread was evaluated
    fn verdict(&self, ticket: &Ticket, thread: &ThreadRef, evaluation: &ThreadEvaluation) {
        let _ = (ticket, thread, evaluation);
    }

    /// A ticket was skipped because of `error`
    fn ticket_failed(&self, error: &VerifyError) {
        let _ = error;
    }
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl EvaluationObserver for NullObserver {}
