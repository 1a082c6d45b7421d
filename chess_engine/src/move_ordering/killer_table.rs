use chess_core::Move;

/// Two killer-move slots per ply, for plies up to a fixed ceiling. Moves
/// past the ceiling simply aren't recorded -- they're deep enough in the
/// tree that move ordering barely matters there.
const MAX_PLY: usize = 64;

#[derive(Clone)]
pub struct KillerTable {
    buckets: [KillerBucket; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self {
            buckets: [KillerBucket::default(); MAX_PLY],
        }
    }
}

#[derive(Default, Clone, Copy)]
struct KillerBucket {
    killers: [Option<Move>; 2],
}

impl KillerTable {
    pub fn store(&mut self, ply: u32, m: Move) {
        if let Some(bucket) = self.buckets.get_mut(ply as usize) {
            bucket.store(m);
        }
    }

    /// `0` if not a killer, `1` for the more-recent slot, `2` for the
    /// older slot -- used by [`super::MoveOrderer::score_move`] to rank
    /// slot 0 above slot 1.
    pub fn slot(&self, ply: u32, m: Move) -> usize {
        self.buckets
            .get(ply as usize)
            .map(|bucket| bucket.slot(m))
            .unwrap_or(0)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl KillerBucket {
    fn store(&mut self, m: Move) {
        if self.killers[0] == Some(m) {
            return;
        }
        self.killers[1] = self.killers[0];
        self.killers[0] = Some(m);
    }

    fn slot(&self, m: Move) -> usize {
        if self.killers[0] == Some(m) {
            1
        } else if self.killers[1] == Some(m) {
            2
        } else {
            0
        }
    }
}

#[cfg(test)]
mod test {
    use chess_core::{Color, MoveKind, Piece, PieceType, Square};
    use pretty_assertions::assert_eq;

    use super::*;

    fn quiet_move(to_col: u8) -> Move {
        Move::new(
            Square::new(1, 0).unwrap(),
            Square::new(2, to_col).unwrap(),
            Piece::new(Color::White, PieceType::Knight),
            None,
            MoveKind::Normal,
            None,
        )
    }

    #[test]
    fn most_recent_killer_occupies_slot_one() {
        let mut table = KillerTable::default();
        table.store(3, quiet_move(0));
        table.store(3, quiet_move(1));

        assert_eq!(table.slot(3, quiet_move(1)), 1);
        assert_eq!(table.slot(3, quiet_move(0)), 2);
        assert_eq!(table.slot(3, quiet_move(2)), 0);
    }

    #[test]
    fn storing_the_same_move_again_does_not_duplicate_it() {
        let mut table = KillerTable::default();
        table.store(0, quiet_move(0));
        table.store(0, quiet_move(0));

        assert_eq!(table.slot(0, quiet_move(0)), 1);
    }

    #[test]
    fn beyond_ceiling_is_ignored_not_a_panic() {
        let mut table = KillerTable::default();
        table.store(1_000, quiet_move(0));
        assert_eq!(table.slot(1_000, quiet_move(0)), 0);
    }
}
