//! Trace replay driver.
//!
//! The simulator owns one [`Cache`] and feeds it addresses strictly in
//! trace order, recording one verdict per address. [`run`] wires this to
//! the file system: trace in, verdict log out.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::loader::{Trace, TraceStop};
use crate::cache::{AccessResult, Cache};
use crate::common::{Addr, Result, SimError};
use crate::config::{CacheConfig, Config};

/// Ordered record of `(address, verdict)` pairs produced by a replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerdictLog {
    records: Vec<(Addr, AccessResult)>,
}

impl VerdictLog {
    /// Appends a verdict.
    pub fn push(&mut self, addr: Addr, result: AccessResult) {
        self.records.push((addr, result));
    }

    /// All records in trace order.
    pub fn records(&self) -> &[(Addr, AccessResult)] {
        &self.records
    }

    /// Verdicts in trace order, without their addresses.
    pub fn verdicts(&self) -> impl Iterator<Item = AccessResult> + '_ {
        self.records.iter().map(|&(_, result)| result)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was replayed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the log as `<address> : HIT` / `<address> : MISS` lines and flushes.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised by `out`.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (addr, result) in &self.records {
            writeln!(out, "{addr} : {result}")?;
        }
        out.flush()
    }
}

/// Top-level simulator: the cache plus the verdicts produced so far.
#[derive(Debug)]
pub struct Simulator {
    /// The cache under test.
    pub cache: Cache,
    log: VerdictLog,
}

impl Simulator {
    /// Creates a simulator around an empty cache.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the geometry is invalid.
    pub fn new(config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(config)?,
            log: VerdictLog::default(),
        })
    }

    /// Replays a single address and records its verdict.
    pub fn step(&mut self, addr: Addr) -> AccessResult {
        let result = self.cache.access(addr);
        self.log.push(addr, result);
        result
    }

    /// Replays `addresses` in order.
    pub fn replay(&mut self, addresses: &[Addr]) {
        for &addr in addresses {
            let _ = self.step(addr);
        }
    }

    /// The verdicts recorded so far.
    pub const fn log(&self) -> &VerdictLog {
        &self.log
    }

    /// Consumes the simulator, returning its verdict log.
    pub fn into_log(self) -> VerdictLog {
        self.log
    }
}

/// Replays `addresses` against a fresh cache built from `config`.
///
/// # Errors
///
/// Returns [`SimError::Config`] if the geometry is invalid.
pub fn replay(config: &CacheConfig, addresses: &[Addr]) -> Result<VerdictLog> {
    let mut sim = Simulator::new(config)?;
    sim.replay(addresses);
    Ok(sim.into_log())
}

/// Runs a full simulation: validate, load the trace, replay, write the log.
///
/// The output file named by `config.output.path` is created (or truncated)
/// only after the trace has been read and the cache constructed.
///
/// # Arguments
///
/// * `config` - Cache geometry, trace cap and output location.
/// * `trace_path` - File holding the address trace.
///
/// # Errors
///
/// - [`SimError::Config`] for an invalid geometry, checked before the trace is opened.
/// - [`SimError::TraceOpen`] / [`SimError::TraceRead`] for trace I/O failures.
/// - [`SimError::OutputCreate`] / [`SimError::OutputWrite`] for output I/O failures.
pub fn run(config: &Config, trace_path: &Path) -> Result<VerdictLog> {
    config.cache.validate()?;

    let trace = Trace::load(trace_path, config.trace.max_addresses)?;
    if let TraceStop::Truncated { limit } = trace.stop {
        info!(limit, "replaying truncated trace");
    }

    let log = replay(&config.cache, &trace.addresses)?;

    let out_path = &config.output.path;
    let file = File::create(out_path).map_err(|source| SimError::OutputCreate {
        path: out_path.clone(),
        source,
    })?;
    log.write_to(BufWriter::new(file))
        .map_err(|source| SimError::OutputWrite {
            path: out_path.clone(),
            source,
        })?;

    info!(
        addresses = log.len(),
        output = %out_path.display(),
        "simulation complete"
    );
    Ok(log)
}
