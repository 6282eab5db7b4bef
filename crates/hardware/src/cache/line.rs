//! Cache line (one way of a set).

/// One way within a set.
///
/// All lines start invalid with `last_used == 0`. A line becomes valid the
/// first time it is chosen as an install target and is never invalidated
/// afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the line holds a block.
    pub valid: bool,
    /// Tag of the resident block; meaningful only when `valid`.
    pub tag: u64,
    /// Recency timestamp of the last install or hit.
    pub last_used: u64,
}

impl CacheLine {
    /// Returns `true` if the line is valid and holds `tag`.
    #[inline]
    pub const fn holds(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    /// Records a hit at recency `stamp`.
    #[inline]
    pub(crate) const fn touch(&mut self, stamp: u64) {
        self.last_used = stamp;
    }

    /// Installs `tag` into the line at recency `stamp`.
    #[inline]
    pub(crate) const fn install(&mut self, tag: u64, stamp: u64) {
        self.valid = true;
        self.tag = tag;
        self.last_used = stamp;
    }
}
