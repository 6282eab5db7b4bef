//! Trace address type.
//!
//! This module defines a strong type for the addresses replayed against the cache model.
//! It provides the following:
//! 1. **Type Safety:** Keeps raw trace values distinct from decoded tags and set indices.
//! 2. **Address Manipulation:** Helpers for field extraction by shift and mask.
//! 3. **Log Formatting:** Decimal `Display`, matching the verdict log format.

use std::fmt;

/// An address read from a memory trace.
///
/// Any 64-bit value is a legal address; decoding into set index and tag
/// is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Addr(pub u64);

impl Addr {
    /// Creates a new address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the address shifted right by `bits`, or zero when `bits`
    /// covers the whole word.
    #[inline]
    pub const fn shifted(self, bits: u32) -> u64 {
        if bits >= u64::BITS { 0 } else { self.0 >> bits }
    }
}

impl From<u64> for Addr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
