//! Domain models for qa-verify
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Comment`] / [`Review`] - entries on a review thread
//! - [`ApprovalSet`] - who currently approves a thread
//! - [`QualifiedApprovers`] - who is allowed to grant the approval that counts
//! - [`Ticket`] / [`ThreadRef`] - the ticket being verified and its thread

mod approval;
mod event;
mod ticket;

pub use approval::{ApprovalSet, QualifiedApprovers};
pub use event::{Comment, Event, EventKind, Review, ReviewState, replay_order};
pub use ticket::{ExternalLink, StatusChange, ThreadRef, Ticket, TicketId};
