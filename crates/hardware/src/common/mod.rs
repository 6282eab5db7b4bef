//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides building blocks shared by the cache model and the driver. It includes:
//! 1. **Address Types:** A strong type for trace addresses.
//! 2. **Constants:** Block offset width, default output path, historical trace bound.
//! 3. **Error Handling:** Configuration and simulation error types.

/// Trace address type.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::Addr;
pub use constants::{DEFAULT_OUTPUT_PATH, LEGACY_MAX_ADDRESSES, OFFSET_BITS};
pub use error::{ConfigError, Result, SimError};
