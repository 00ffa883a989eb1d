//! qa-verify - decide whether a ticket's QA contact approved its fix
//!
//! This library provides the approval engine (comment classification,
//! approval replay, QA-contact extraction, verdict) and the batch verifier
//! that runs it for many tickets with per-ticket error collection.
//!
//! ```
//! use qa_verify::core::models::Comment;
//! use qa_verify::core::ports::NullObserver;
//! use qa_verify::core::services::{Classifier, evaluate_thread};
//!
//! let comments = vec![
//!     Comment::new("robot", "Requesting review from QA contact:\n/cc @alice"),
//!     Comment::new("bob", "/lgtm"),
//!     Comment::new("alice", "/lgtm"),
//! ];
//! let eval = evaluate_thread(Classifier::standard(), &comments, &[], &NullObserver);
//! assert!(eval.approved);
//! assert_eq!(eval.approved_by.as_deref(), Some("alice"));
//! ```

// Deny all clippy warnings in this crate
#![deny(clippy::all, clippy::pedantic, clippy::nursery, unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
