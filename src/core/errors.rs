//! Per-ticket verification errors
//!
//! Every failure is scoped to one ticket. The batch collects them and moves
//! on to the next ticket.

use std::num::ParseIntError;

use thiserror::Error;

use super::models::{ThreadRef, TicketId};

/// Why a ticket could not be verified
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The raw ticket identifier is not an integer
    #[error("failed to convert ticket id `{raw}` to integer: {source}")]
    InvalidTicketId {
        /// Identifier as given
        raw: String,
        /// Parse failure
        source: ParseIntError,
    },

    /// The tracker could not list the ticket's external links
    #[error("failed to get external links for ticket `{ticket}`: {cause}")]
    LinkLookup {
        /// Ticket being resolved
        ticket: TicketId,
        /// Rendered collaborator error
        cause: String,
    },

    /// None of the ticket's links point at a review thread
    #[error("failed to identify associated thread for ticket `{ticket}`")]
    NoThread {
        /// Ticket being resolved
        ticket: TicketId,
    },

    /// The ticket record itself could not be fetched
    #[error("unable to get ticket `{ticket}`: {cause}")]
    TicketLookup {
        /// Ticket being fetched
        ticket: TicketId,
        /// Rendered collaborator error
        cause: String,
    },

    /// The thread's comments could not be fetched
    #[error("unable to retrieve comments for thread `{thread}`: {cause}")]
    Comments {
        /// Ticket the thread belongs to
        ticket: TicketId,
        /// Thread being fetched
        thread: ThreadRef,
        /// Rendered collaborator error
        cause: String,
    },

    /// The thread's reviews could not be fetched
    #[error("unable to retrieve reviews for thread `{thread}`: {cause}")]
    Reviews {
        /// Ticket the thread belongs to
        ticket: TicketId,
        /// Thread being fetched
        thread: ThreadRef,
        /// Rendered collaborator error
        cause: String,
    },

    /// The verdict sink rejected the verdict
    #[error("failed to record verdict for ticket `{ticket}`: {cause}")]
    Sink {
        /// Ticket whose verdict was being recorded
        ticket: TicketId,
        /// Rendered collaborator error
        cause: String,
    },
}

impl VerifyError {
    /// Ticket this error belongs to, when the identifier was valid
    #[must_use]
    pub const fn ticket(&self) -> Option<TicketId> {
        match self {
            Self::InvalidTicketId { .. } => None,
            Self::LinkLookup { ticket, .. }
            | Self::NoThread { ticket }
            | Self::TicketLookup { ticket, .. }
            | Self::Comments { ticket, .. }
            | Self::Reviews { ticket, .. }
            | Self::Sink { ticket, .. } => Some(*ticket),
        }
    }
}

/// Render a collaborator error with its full cause chain
pub(crate) fn render_cause(err: &anyhow::Error) -> String {
    format!("{err:#}")
}
