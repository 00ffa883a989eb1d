//! Command implementations

mod evaluate;
mod init;
mod verify;

pub use evaluate::evaluate;
pub use init::init;
pub use verify::verify;
