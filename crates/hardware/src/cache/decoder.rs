//! Address decomposition.
//!
//! Splits an address into the set-index and tag fields for a given cache
//! geometry:
//!
//! ```text
//! | tag                      | index      | offset      |
//!   addr >> (index + offset)   index_bits   offset_bits
//! ```
//!
//! Decoding is total and pure: every 64-bit value is a legal address.

use crate::common::{Addr, OFFSET_BITS};

/// Stateless decoder from addresses to `(set_index, tag)` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressDecoder {
    index_bits: u32,
    offset_bits: u32,
    index_mask: u64,
}

impl AddressDecoder {
    /// Creates a decoder with `index_bits` of set index and no block offset.
    pub const fn new(index_bits: u32) -> Self {
        Self::with_offset(index_bits, OFFSET_BITS)
    }

    /// Creates a decoder with an explicit block-offset width.
    ///
    /// # Arguments
    ///
    /// * `index_bits` - Width of the set-index field (`log2(num_sets)`).
    /// * `offset_bits` - Width of the block-offset field below the index.
    pub const fn with_offset(index_bits: u32, offset_bits: u32) -> Self {
        let index_mask = if index_bits >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << index_bits) - 1
        };
        Self {
            index_bits,
            offset_bits,
            index_mask,
        }
    }

    /// Width of the set-index field.
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Width of the block-offset field.
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Set index: `(addr >> offset_bits) & ((1 << index_bits) - 1)`.
    #[inline]
    pub const fn set_index(&self, addr: Addr) -> usize {
        (addr.shifted(self.offset_bits) & self.index_mask) as usize
    }

    /// Tag: `addr >> (index_bits + offset_bits)`.
    #[inline]
    pub const fn tag(&self, addr: Addr) -> u64 {
        addr.shifted(self.index_bits.saturating_add(self.offset_bits))
    }

    /// Decodes an address into `(set_index, tag)`.
    #[inline]
    pub const fn decode(&self, addr: Addr) -> (usize, u64) {
        (self.set_index(addr), self.tag(addr))
    }
}
