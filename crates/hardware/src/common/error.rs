//! Configuration and Simulation Error definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Configuration Errors:** Invalid cache geometry, detected before any cache exists.
//! 2. **Simulation Errors:** Trace and output I/O failures, each tagged with the path involved.
//! 3. **Result Alias:** A crate-wide `Result` over [`SimError`].
//!
//! Malformed trace tokens and trace truncation are not errors; the trace
//! reader recovers from both locally and reports them through
//! [`TraceStop`](crate::sim::TraceStop).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid cache geometry or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The cache was configured with zero entries.
    #[error("number of entries must be a positive integer")]
    ZeroEntries,

    /// The cache was configured with zero ways per set.
    #[error("associativity must be a positive integer")]
    ZeroAssociativity,

    /// The entry count is not a multiple of the associativity.
    #[error("number of entries ({entries}) must be divisible by associativity ({associativity})")]
    NotDivisible {
        /// Configured number of entries.
        entries: u64,
        /// Configured ways per set.
        associativity: u64,
    },

    /// The derived set count cannot be indexed by a bit mask.
    #[error("number of sets ({sets}) must be a power of two")]
    SetsNotPowerOfTwo {
        /// Derived number of sets (`entries / associativity`).
        sets: u64,
    },

    /// The line array for this geometry cannot be allocated.
    #[error("a cache of {entries} entries is too large to allocate")]
    TooLarge {
        /// Configured number of entries.
        entries: u64,
    },

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("could not read configuration file {}: {source}", .path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Fatal failure of a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace file could not be opened.
    #[error("could not open input file {}: {source}", .path.display())]
    TraceOpen {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading the trace failed part way through.
    #[error("could not read input file {}: {source}", .path.display())]
    TraceRead {
        /// Path of the trace file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The verdict log could not be created.
    #[error("could not create output file {}: {source}", .path.display())]
    OutputCreate {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing the verdict log failed.
    #[error("could not write output file {}: {source}", .path.display())]
    OutputWrite {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Result type for simulation runs.
pub type Result<T> = std::result::Result<T, SimError>;
