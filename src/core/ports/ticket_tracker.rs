//! Ticket tracker port
//!
//! Defines the interface to the system that holds tickets.

use crate::core::models::{ExternalLink, Ticket, TicketId};

/// Ticket tracker abstraction
///
/// Implementations talk to the tracking system (or a local snapshot of it).
#[cfg_attr(test, mockall::automock)]
pub trait TicketTracker: Send + Sync {
    /// Fetch a ticket's current record
    fn ticket(&self, id: TicketId) -> anyhow::Result<Ticket>;

    /// List the external links attached to a ticket
    fn external_links(&self, id: TicketId) -> anyhow::Result<Vec<ExternalLink>>;

    /// Move a ticket to a new status
    fn update_status(&self, id: TicketId, status: &str) -> anyhow::Result<()>;
}
