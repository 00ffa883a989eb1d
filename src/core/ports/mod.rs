//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the approval engine and the
//! systems around it (ticket tracker, code host, configuration, logging).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. Tests swap in mocks; the CLI wires in real adapters.

mod discussion_source;
mod observer;
mod review_policy;
mod ticket_tracker;
mod verdict_sink;

pub use discussion_source::DiscussionSource;
pub use observer::{EvaluationObserver, NullObserver};
pub use review_policy::ReviewPolicy;
pub use ticket_tracker::TicketTracker;
pub use verdict_sink::VerdictSink;

#[cfg(test)]
pub use discussion_source::MockDiscussionSource;
#[cfg(test)]
pub use ticket_tracker::MockTicketTracker;
#[cfg(test)]
pub use verdict_sink::MockVerdictSink;
