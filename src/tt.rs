//! Transposition table for caching search results.
//!
//! Entries are keyed by position hash, remaining depth and side to move, and
//! carry a bound type so that scores obtained under a narrowed alpha-beta
//! window are only reused where they are valid. The full key is stored in the
//! slot and compared on probe; a slot collision is a miss, never a wrong hit.

use std::mem;

use crate::board::Player;

/// Default table size in megabytes.
pub const DEFAULT_TT_MB: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

/// Identity of a searched node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub hash: u64,
    pub depth: u32,
    pub player: Player,
}

impl CacheKey {
    #[must_use]
    pub fn new(hash: u64, depth: u32, player: Player) -> Self {
        CacheKey {
            hash,
            depth,
            player,
        }
    }

    /// Mix depth and side into the position hash for slot selection.
    fn slot_hash(&self) -> u64 {
        let side = match self.player {
            Player::White => 0,
            Player::Black => 0xD6E8_FEB8_6659_FD93,
        };
        self.hash ^ u64::from(self.depth).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ side
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub key: CacheKey,
    pub score: i32,
    pub bound_type: BoundType,
}

impl TTEntry {
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    /// Score usable for a node searched with window `[alpha, beta]`, if any.
    #[must_use]
    pub fn cutoff(&self, alpha: i32, beta: i32) -> Option<i32> {
        match self.bound_type {
            BoundType::Exact => Some(self.score),
            BoundType::LowerBound if self.score >= beta => Some(self.score),
            BoundType::UpperBound if self.score <= alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Fixed-size, direct-mapped transposition table owned by one engine.
pub struct TranspositionTable {
    table: Vec<Option<TTEntry>>,
    mask: usize,
}

impl TranspositionTable {
    /// Create a new transposition table with the given size in megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = mem::size_of::<Option<TTEntry>>();
        let mut num_entries = (size_mb * 1024 * 1024) / entry_size;

        // Power of 2 for mask indexing
        num_entries = num_entries.next_power_of_two() / 2;
        if num_entries == 0 {
            num_entries = 1024;
        }

        TranspositionTable {
            table: vec![None; num_entries],
            mask: num_entries - 1,
        }
    }

    fn index(&self, key: &CacheKey) -> usize {
        (key.slot_hash() as usize) & self.mask
    }

    /// Entry stored under exactly `key`, if still present.
    #[must_use]
    pub fn probe(&self, key: CacheKey) -> Option<&TTEntry> {
        self.table[self.index(&key)]
            .as_ref()
            .filter(|entry| entry.key == key)
    }

    /// Store a result, replacing whatever occupied the slot.
    pub fn store(&mut self, key: CacheKey, score: i32, bound_type: BoundType) {
        let index = self.index(&key);
        self.table[index] = Some(TTEntry {
            key,
            score,
            bound_type,
        });
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.iter().all(Option::is_none)
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        self.table.fill(None);
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_MB)
    }
}
