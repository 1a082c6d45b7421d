//! A direct-mapped transposition table keyed by position fingerprint.
//!
//! Unlike a multi-way bucketed table, a slot here holds exactly one entry;
//! a collision simply overwrites it. A stored 16-bit verifier (the high
//! bits of the Zobrist hash not used to index the table) catches the case
//! where two different positions hash to the same slot, so a verifier
//! mismatch is treated as "not found" rather than returning a wrong score.

use chess_core::{Move, ZobristHash};

use crate::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranspositionFlag {
    Exact,
    LowerBound,
    UpperBound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranspositionEntry {
    pub flag: TranspositionFlag,
    pub depth: u32,
    pub score: Score,
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    verifier: u16,
    entry: TranspositionEntry,
}

pub struct TranspositionTable {
    mask: usize,
    slots: Vec<Option<Slot>>,
}

impl TranspositionTable {
    /// `size_mb` megabytes of table, rounded down to a power-of-two number
    /// of slots.
    pub fn new(size_mb: usize) -> Self {
        assert!(size_mb > 0);

        const BYTES_PER_MB: usize = 1024 * 1024;
        let slot_size = std::mem::size_of::<Option<Slot>>();
        let max_slots = (size_mb * BYTES_PER_MB / slot_size).max(1);
        let num_slots = max_slots.next_power_of_two() / 2;
        let num_slots = num_slots.max(1);

        Self {
            mask: num_slots - 1,
            slots: vec![None; num_slots],
        }
    }

    fn index(&self, key: ZobristHash) -> usize {
        key.0 as usize & self.mask
    }

    fn verifier(key: ZobristHash) -> u16 {
        (key.0 >> 48) as u16
    }

    pub fn get(&self, key: ZobristHash) -> Option<TranspositionEntry> {
        let slot = self.slots[self.index(key)]?;
        if slot.verifier != Self::verifier(key) {
            log::trace!("transposition table verifier mismatch at slot, discarding stored entry");
            return None;
        }
        Some(slot.entry)
    }

    /// Always overwrites; depth-preferred replacement is not implemented
    /// since killer/TT churn within one `best_move` call is shallow enough
    /// that always-replace performs adequately.
    pub fn store(&mut self, key: ZobristHash, entry: TranspositionEntry) {
        let index = self.index(key);
        self.slots[index] = Some(Slot {
            verifier: Self::verifier(key),
            entry,
        });
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}
