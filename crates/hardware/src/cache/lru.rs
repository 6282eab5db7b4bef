//! Least Recently Used (LRU) victim selection.
//!
//! Each line carries the value of the cache's recency counter at its last
//! install or hit. On a miss the install target is the first invalid way
//! of the set; once the set is full it is the way with the smallest
//! timestamp, ties going to the lowest way index.
//!
//! # Performance
//!
//! - **Time Complexity:** O(W) per miss where W is the associativity
//! - **Space Complexity:** one `u64` timestamp per line
//!
//! A linear scan over timestamps is kept over a heap or linked list: sets
//! are small and the scan touches contiguous memory.

use super::line::CacheLine;

/// Picks the way to install into on a miss.
///
/// Empty ways are filled in way order before anything is evicted.
///
/// # Arguments
///
/// * `set` - The ways of the target set; must not be empty.
///
/// # Returns
///
/// The index of the way to install into.
pub fn select_victim(set: &[CacheLine]) -> usize {
    set.iter()
        .position(|line| !line.valid)
        .unwrap_or_else(|| find_lru_way(set))
}

/// Returns the way with the oldest recency timestamp.
///
/// On equal timestamps the lowest way index wins, which also covers a set
/// where every `last_used` is still 0.
pub fn find_lru_way(set: &[CacheLine]) -> usize {
    set.iter()
        .enumerate()
        .min_by_key(|(_, line)| line.last_used)
        .map_or(0, |(way, _)| way)
}
