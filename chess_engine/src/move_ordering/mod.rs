//! Move ordering: the order candidate moves are tried in at a `negamax`
//! node. Good ordering is what makes alpha-beta pruning effective, since a
//! cutoff on the first move tried prunes the whole remaining subtree.

mod killer_table;

use chess_core::{Move, PieceType};
use killer_table::KillerTable;

pub struct MoveOrderer {
    killers: KillerTable,
}

impl MoveOrderer {
    const HASH_MOVE_SCORE: i32 = 1_000_000_000;
    const CAPTURE_BIAS: i32 = 10_000_000;
    const KILLER_SLOT_ONE_BIAS: i32 = 5_000_000;
    const KILLER_SLOT_TWO_BIAS: i32 = 4_000_000;
    const QUIET_BIAS: i32 = 0;

    pub fn new() -> Self {
        Self {
            killers: KillerTable::default(),
        }
    }

    pub fn store_killer(&mut self, ply: u32, m: Move) {
        self.killers.store(ply, m);
    }

    pub fn clear_killers(&mut self) {
        self.killers.clear();
    }

    /// Sorts `moves` in place, highest-priority first: TT move, then
    /// MVV-LVA captures, then killer moves, then everything else in
    /// generation order.
    pub fn order_moves(&self, ply: u32, tt_move: Option<Move>, moves: &mut [Move]) {
        moves.sort_by_cached_key(|m| -self.score_move(ply, tt_move, *m));
    }

    fn score_move(&self, ply: u32, tt_move: Option<Move>, m: Move) -> i32 {
        if tt_move == Some(m) {
            return Self::HASH_MOVE_SCORE;
        }

        if let Some(captured) = m.captured {
            return Self::CAPTURE_BIAS + mvv_lva(captured.kind(), m.moved.kind());
        }

        match self.killers.slot(ply, m) {
            1 => Self::KILLER_SLOT_ONE_BIAS,
            2 => Self::KILLER_SLOT_TWO_BIAS,
            _ => Self::QUIET_BIAS,
        }
    }
}

/// Most Valuable Victim, Least Valuable Aggressor: rank by the captured
/// piece's value first (scaled up so it always dominates the aggressor
/// term), then prefer the cheapest capturing piece.
pub fn mvv_lva(victim: PieceType, aggressor: PieceType) -> i32 {
    victim.material_value() * 10 - aggressor.material_value()
}
