//! Global Simulator Constants.
//!
//! This module defines constants shared by the cache model and the trace driver. It includes:
//! 1. **Geometry Constants:** Block offset width of the modeled cache.
//! 2. **Driver Constants:** Default output location and the historical trace bound.

/// Number of block-offset bits in an address.
///
/// Each line holds exactly one addressable unit, so no offset field is modeled.
pub const OFFSET_BITS: u32 = 0;

/// Default path of the verdict log written by a run.
pub const DEFAULT_OUTPUT_PATH: &str = "cache_sim_output";

/// Historical upper bound on the number of trace addresses.
///
/// Not applied by default. Pass it as an explicit cap to reproduce the
/// bounded-buffer behavior; truncation is then reported.
pub const LEGACY_MAX_ADDRESSES: usize = 1000;
