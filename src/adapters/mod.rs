//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `snapshot/` - Tickets and threads served from a JSON snapshot
//! - `log_observer` - Engine notifications written to the `log` facade
//! - `sink` - What happens to a verdict (dry run, recording, status change)

pub mod log_observer;
pub mod sink;
pub mod snapshot;

pub use log_observer::LogObserver;
pub use sink::{DryRunSink, RecordingSink, StatusTransitionSink};
pub use snapshot::SnapshotStore;
