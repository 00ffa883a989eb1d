//! Core domain logic for qa-verify
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Comment, Review, ApprovalSet, Ticket)
//! - `services/` - Classification, replay, verdict and batch orchestration
//! - `ports/` - Trait definitions for external collaborators
//! - `errors` - Per-ticket error taxonomy

pub mod errors;
pub mod models;
pub mod ports;
pub mod services;
