pub mod consumer;
pub mod producer;

pub use consumer::{advance, Consumer, Cursor};
pub use producer::Producer;

// Errors pass through from the core unchanged; re-exported so client
// code does not need a direct memlog-core dependency for matching.
pub use memlog_core::{Error, Result};
