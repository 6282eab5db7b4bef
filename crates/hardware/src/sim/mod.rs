//! Trace loading and replay.
//!
//! Provides the trace reader and the driver that replays a trace against
//! a cache and writes the resulting verdict log.

/// Memory trace loader.
pub mod loader;

/// Replay driver and verdict log.
pub mod simulator;

pub use loader::{Trace, TraceStop};
pub use simulator::{Simulator, VerdictLog, replay, run};
