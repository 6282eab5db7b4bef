//! Trace-driven cache simulator library.
//!
//! This crate replays a trace of memory addresses against a configurable
//! set-associative cache and reports a HIT or MISS verdict per address:
//! 1. **Cache:** Address decoding into set index and tag, per-set lookup, and LRU replacement.
//! 2. **Configuration:** Geometry validation, trace cap, and output location.
//! 3. **Simulation:** Trace loading, in-order replay, and verdict log output.

/// Cache model (decoder, lines, LRU replacement).
pub mod cache;
/// Common types and constants (addresses, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-loadable structures).
pub mod config;
/// Trace loader and replay driver.
pub mod sim;

/// The cache model; construct with `Cache::new`.
pub use crate::cache::{AccessResult, Cache};
/// Trace address type.
pub use crate::common::Addr;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
