//! Business logic services
//!
//! Pure logic that operates on domain models. Only the [`verifier`] talks to
//! collaborators, and it does so through the port traits.
//!
//! - [`classifier`] - Recognize approve/cancel commands and QA assignments
//! - [`extractor`] - Collect the qualified approvers of a thread
//! - [`tracker`] - Replay events into the set of active approvals
//! - [`verdict`] - Combine both into a thread verdict
//! - [`verifier`] - Run a batch of tickets with per-ticket error collection

pub mod classifier;
pub mod extractor;
pub mod tracker;
pub mod verdict;
pub mod verifier;

pub use classifier::{Classification, Classifier, CommandSyntax};
pub use extractor::qualified_approvers;
pub use tracker::{ApprovalEffect, ApprovalTracker, replay};
pub use verdict::{ThreadEvaluation, evaluate_thread, verdict};
pub use verifier::{DEFAULT_LINK_HOST, TicketOutcome, Verifier, VerifyReport};
