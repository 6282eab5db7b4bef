//! Configuration system for the cache simulator.
//!
//! This module defines all configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline cache geometry and driver settings.
//! 2. **Structures:** Hierarchical config for the cache, the trace reader, and the verdict log.
//! 3. **Validation:** Geometry checks performed before any cache is constructed.
//!
//! Configuration is supplied via JSON (`Config::from_json`) or built from
//! command-line arguments on top of `Config::default()`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden in a JSON document or on the command line.
mod defaults {
    /// Default number of cache entries (lines).
    pub const NUM_ENTRIES: u64 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: u64 = 1;

    /// Default verdict log location.
    pub const OUTPUT_PATH: &str = crate::common::constants::DEFAULT_OUTPUT_PATH;
}

/// Root configuration structure for a simulation run.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::Config;
///
/// let json = r#"{
///     "cache": { "num_entries": 64, "associativity": 4 },
///     "trace": { "max_addresses": 1000 },
///     "output": { "path": "run.log" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.cache.num_sets(), 16);
/// assert_eq!(config.trace.max_addresses, Some(1000));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Cache geometry
    #[serde(default)]
    pub cache: CacheConfig,
    /// Trace reader settings
    #[serde(default)]
    pub trace: TraceConfig,
    /// Verdict log settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields fall back to their defaults. The
    /// geometry is not validated here; see [`CacheConfig::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or
    /// does not match the configuration schema.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are not a valid configuration.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Cache geometry.
///
/// The cache holds `num_entries` lines grouped into sets of
/// `associativity` ways; the set count must be a power of two so that the
/// index field can be extracted with a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Total number of lines
    #[serde(default = "CacheConfig::default_num_entries")]
    pub num_entries: u64,

    /// Ways per set (1 = direct-mapped, `num_entries` = fully associative)
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u64,
}

impl CacheConfig {
    /// Creates a geometry from an entry count and associativity.
    pub const fn new(num_entries: u64, associativity: u64) -> Self {
        Self {
            num_entries,
            associativity,
        }
    }

    /// Returns the default number of entries.
    const fn default_num_entries() -> u64 {
        defaults::NUM_ENTRIES
    }

    /// Returns the default associativity.
    const fn default_associativity() -> u64 {
        defaults::ASSOCIATIVITY
    }

    /// Number of sets (`num_entries / associativity`), or 0 for a zero associativity.
    pub const fn num_sets(&self) -> u64 {
        if self.associativity == 0 {
            0
        } else {
            self.num_entries / self.associativity
        }
    }

    /// Width of the set-index field: `log2(num_sets)`, truncated.
    ///
    /// Exact only for a validated geometry.
    pub const fn index_bits(&self) -> u32 {
        let sets = self.num_sets();
        if sets == 0 { 0 } else { sets.ilog2() }
    }

    /// Checks the geometry invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroEntries`] / [`ConfigError::ZeroAssociativity`] for a zero field.
    /// - [`ConfigError::NotDivisible`] if `num_entries % associativity != 0`.
    /// - [`ConfigError::SetsNotPowerOfTwo`] if the set count is not a power of two.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_entries == 0 {
            return Err(ConfigError::ZeroEntries);
        }
        if self.associativity == 0 {
            return Err(ConfigError::ZeroAssociativity);
        }
        if self.num_entries % self.associativity != 0 {
            return Err(ConfigError::NotDivisible {
                entries: self.num_entries,
                associativity: self.associativity,
            });
        }
        let sets = self.num_sets();
        if !sets.is_power_of_two() {
            return Err(ConfigError::SetsNotPowerOfTwo { sets });
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            num_entries: defaults::NUM_ENTRIES,
            associativity: defaults::ASSOCIATIVITY,
        }
    }
}

/// Trace reader settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Maximum number of addresses to replay. `None` reads the whole trace;
    /// a cap truncates the trace and the truncation is reported.
    #[serde(default)]
    pub max_addresses: Option<usize>,
}

/// Verdict log settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    /// File the verdict log is written to (created or truncated)
    #[serde(default = "OutputConfig::default_path")]
    pub path: PathBuf,
}

impl OutputConfig {
    /// Returns the default verdict log path.
    fn default_path() -> PathBuf {
        PathBuf::from(defaults::OUTPUT_PATH)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}
