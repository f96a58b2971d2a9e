//! Reporting
//!
//! This module owns everything that leaves the process: the console and
//! output file writer, the run ordinal counter, and structured logging.

pub mod counter;
pub mod logging;
pub mod sink;

// Re-export commonly used items
pub use counter::RunCounter;
pub use sink::{OutputSink, SinkHandle};
