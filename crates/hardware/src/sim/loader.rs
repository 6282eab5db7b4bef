//! Memory Trace Loader.
//!
//! This module reads address traces from disk or any buffered reader. It performs:
//! 1. **Tokenizing:** Splits the input on whitespace and newlines, one address per token.
//! 2. **Parsing:** Accepts unsigned decimal integers that fit in 64 bits.
//! 3. **Recovery:** Stops at the first malformed token, or at an explicit cap, and
//!    reports why reading stopped instead of failing the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::common::{Addr, Result, SimError};

/// Why the loader stopped reading addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceStop {
    /// The whole input was consumed.
    EndOfInput,
    /// A token did not parse as an unsigned integer; it and everything after it were ignored.
    MalformedToken {
        /// The offending token, lossily decoded if it was not UTF-8.
        token: String,
        /// Number of addresses read before it.
        position: usize,
    },
    /// The configured cap was reached with input remaining.
    Truncated {
        /// The cap that was applied.
        limit: usize,
    },
}

/// An ordered sequence of addresses to replay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    /// Addresses in trace order.
    pub addresses: Vec<Addr>,
    /// Why reading stopped.
    pub stop: TraceStop,
}

impl Trace {
    /// Reads a trace from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of whitespace-separated decimal addresses.
    /// * `max_addresses` - Optional cap on the number of addresses kept.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails. Malformed tokens,
    /// including bytes that are not UTF-8, and truncation are not errors.
    pub fn from_reader<R: BufRead>(reader: R, max_addresses: Option<usize>) -> io::Result<Self> {
        let mut addresses = Vec::new();

        for line in reader.split(b'\n') {
            let line = line?;
            for token in line.split(u8::is_ascii_whitespace).filter(|t| !t.is_empty()) {
                if let Some(limit) = max_addresses.filter(|&limit| addresses.len() >= limit) {
                    warn!(limit, "trace truncated, remaining addresses ignored");
                    return Ok(Self {
                        addresses,
                        stop: TraceStop::Truncated { limit },
                    });
                }
                if let Some(value) = parse_address(token) {
                    addresses.push(Addr(value));
                } else {
                    let token = String::from_utf8_lossy(token).into_owned();
                    let position = addresses.len();
                    warn!(%token, position, "malformed trace token, treating as end of trace");
                    return Ok(Self {
                        addresses,
                        stop: TraceStop::MalformedToken { token, position },
                    });
                }
            }
        }

        Ok(Self {
            addresses,
            stop: TraceStop::EndOfInput,
        })
    }

    /// Opens and reads a trace file.
    ///
    /// # Errors
    ///
    /// - [`SimError::TraceOpen`] if the file cannot be opened.
    /// - [`SimError::TraceRead`] if reading it fails.
    pub fn load(path: &Path, max_addresses: Option<usize>) -> Result<Self> {
        let file = File::open(path).map_err(|source| SimError::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let trace = Self::from_reader(BufReader::new(file), max_addresses).map_err(|source| {
            SimError::TraceRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), addresses = trace.len(), "trace loaded");
        Ok(trace)
    }

    /// Number of addresses read.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// Returns `true` if no address was read.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Parses one token as an unsigned decimal address.
fn parse_address(token: &[u8]) -> Option<u64> {
    std::str::from_utf8(token).ok()?.parse().ok()
}
