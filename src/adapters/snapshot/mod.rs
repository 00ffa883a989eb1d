//! JSON snapshot adapter
//!
//! Serves tickets and review threads from a local JSON document, for offline
//! runs and tests.
//!
//! - [`parser`] - Snapshot file format and loading
//! - [`store`] - `TicketTracker` + `DiscussionSource` implementation

pub mod parser;
pub mod store;

pub use parser::{
    SnapshotFile, ThreadEntry, ThreadLog, TicketEntry, load_snapshot, load_thread_log,
    parse_snapshot,
};
pub use store::SnapshotStore;
