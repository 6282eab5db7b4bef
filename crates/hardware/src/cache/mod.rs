//! Set-Associative Cache Model.
//!
//! This module implements the set-associative cache replayed by the driver.
//! It performs:
//! 1. **Decoding:** Splits each address into set index and tag ([`AddressDecoder`]).
//! 2. **Lookup:** Linear scan of the ways of the indexed set.
//! 3. **Replacement:** Install on miss into the first empty way, else the LRU way.
//!
//! Recency is tracked with a single counter owned by the cache. It is
//! incremented on every hit and every install and the new value is stamped
//! on the touched line, so the smallest stamp in a set is its LRU way.

/// Address decomposition into set index and tag.
pub mod decoder;

/// Cache line representation.
pub mod line;

/// LRU victim selection.
pub mod lru;

use std::fmt;

use tracing::{debug, trace};

pub use self::decoder::AddressDecoder;
pub use self::line::CacheLine;

use crate::common::{Addr, ConfigError};
use crate::config::CacheConfig;

/// Outcome of a single cache access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessResult {
    /// The tag was resident in the indexed set.
    Hit,
    /// The tag was absent and has been installed.
    Miss,
}

impl AccessResult {
    /// Returns `true` for [`AccessResult::Hit`].
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl fmt::Display for AccessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("HIT"),
            Self::Miss => f.write_str("MISS"),
        }
    }
}

/// Set-associative cache with true LRU replacement.
///
/// Lines are stored flattened: way `w` of set `s` lives at
/// `s * ways + w`.
pub struct Cache {
    lines: Vec<CacheLine>,
    num_sets: usize,
    ways: usize,
    decoder: AddressDecoder,
    counter: u64,
}

impl Cache {
    /// Creates an empty cache with the given geometry.
    ///
    /// # Arguments
    ///
    /// * `config` - Entry count and associativity.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] reported by [`CacheConfig::validate`]
    /// for a non-positive, non-divisible or non-power-of-two geometry, and
    /// [`ConfigError::TooLarge`] if the lines cannot be allocated.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let too_large = || ConfigError::TooLarge {
            entries: config.num_entries,
        };
        let num_sets = usize::try_from(config.num_sets()).map_err(|_| too_large())?;
        let ways = usize::try_from(config.associativity).map_err(|_| too_large())?;
        let len = num_sets.checked_mul(ways).ok_or_else(too_large)?;

        let mut lines = Vec::new();
        lines.try_reserve_exact(len).map_err(|_| too_large())?;
        lines.resize(len, CacheLine::default());

        let decoder = AddressDecoder::new(config.index_bits());

        debug!(
            entries = config.num_entries,
            ways,
            sets = num_sets,
            index_bits = decoder.index_bits(),
            "cache constructed"
        );

        Ok(Self {
            lines,
            num_sets,
            ways,
            decoder,
            counter: 0,
        })
    }

    /// Accesses the cache for the specified address.
    ///
    /// On a hit the matching way is stamped with the next counter value.
    /// On a miss the tag is installed into the first invalid way of the
    /// set, or into its LRU way when the set is full, and stamped likewise.
    ///
    /// # Arguments
    ///
    /// * `addr` - The address to access.
    ///
    /// # Returns
    ///
    /// [`AccessResult::Hit`] if the tag was resident, [`AccessResult::Miss`] otherwise.
    pub fn access(&mut self, addr: Addr) -> AccessResult {
        let (set_index, tag) = self.decoder.decode(addr);
        let base = set_index * self.ways;
        let set = &mut self.lines[base..base + self.ways];

        if let Some(way) = set.iter().position(|line| line.holds(tag)) {
            self.counter += 1;
            set[way].touch(self.counter);
            trace!(%addr, set = set_index, tag, way, "hit");
            return AccessResult::Hit;
        }

        let way = lru::select_victim(set);
        let victim = set[way];
        self.counter += 1;
        set[way].install(tag, self.counter);
        if victim.valid {
            trace!(%addr, set = set_index, tag, way, evicted = victim.tag, "miss");
        } else {
            trace!(%addr, set = set_index, tag, way, "miss");
        }
        AccessResult::Miss
    }

    /// Checks if the block holding `addr` is resident, without touching recency.
    pub fn contains(&self, addr: Addr) -> bool {
        let (set_index, tag) = self.decoder.decode(addr);
        self.set(set_index).iter().any(|line| line.holds(tag))
    }

    /// Returns the ways of set `set_index`.
    ///
    /// # Panics
    ///
    /// Panics if `set_index >= self.num_sets()`.
    pub fn set(&self, set_index: usize) -> &[CacheLine] {
        let base = set_index * self.ways;
        &self.lines[base..base + self.ways]
    }

    /// Returns way `way` of set `set_index`, if both are in range.
    pub fn line(&self, set_index: usize, way: usize) -> Option<&CacheLine> {
        if set_index >= self.num_sets || way >= self.ways {
            return None;
        }
        self.lines.get(set_index * self.ways + way)
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Ways per set.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// The decoder used to split addresses.
    pub const fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    /// Current value of the recency counter (number of hits plus installs).
    pub const fn counter(&self) -> u64 {
        self.counter
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("num_sets", &self.num_sets)
            .field("ways", &self.ways)
            .field("index_bits", &self.decoder.index_bits())
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}
