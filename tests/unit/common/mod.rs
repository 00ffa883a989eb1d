//! Common test utilities
//!
//! - `fixtures.rs` - Thread builders
//! - `mocks.rs` - Hand-written port implementations
