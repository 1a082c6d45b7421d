use std::hash::{Hash, Hasher};

use super::{Piece, PieceType, Square};

/// Which special rule (if any) a move invokes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastlingKingside,
    CastlingQueenside,
    Promotion,
}

/// A single move.
///
/// `moved` and `captured` are snapshots of the pieces involved, copied by
/// value -- they are not references into a [`Board`](super::Board), so a
/// `Move` remains meaningful even after the board it was generated from has
/// since been mutated.
///
/// Two moves are equal (and hash equal) iff their `(from, to, kind,
/// promotion)` tuples match; the piece snapshots and the `causes_check` /
/// `causes_checkmate` flags are metadata, not identity.
#[derive(Debug, Copy, Clone)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    pub promotion: Option<PieceType>,
    pub causes_check: bool,
    pub causes_checkmate: bool,
}

impl Move {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        from: Square,
        to: Square,
        moved: Piece,
        captured: Option<Piece>,
        kind: MoveKind,
        promotion: Option<PieceType>,
    ) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            kind,
            promotion,
            causes_check: false,
            causes_checkmate: false,
        }
    }

    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    fn identity(&self) -> (Square, Square, MoveKind, Option<PieceType>) {
        (self.from, self.to, self.kind, self.promotion)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

#[cfg(test)]
mod test {
    use std::collections::hash_map::DefaultHasher;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::board::Color;

    fn hash_of(m: &Move) -> u64 {
        let mut hasher = DefaultHasher::new();
        m.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_snapshots_and_check_flags() {
        let from = Square::new(1, 4).unwrap();
        let to = Square::new(3, 4).unwrap();
        let pawn = Piece::new(Color::White, PieceType::Pawn);

        let mut a = Move::new(from, to, pawn, None, MoveKind::DoublePawnPush, None);
        let mut b = Move::new(from, to, pawn, None, MoveKind::DoublePawnPush, None);
        b.causes_check = true;
        b.causes_checkmate = true;

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        a.kind = MoveKind::Normal;
        assert_ne!(a, b);
    }

    #[test]
    fn is_capture_reflects_captured_piece() {
        let from = Square::new(4, 4).unwrap();
        let to = Square::new(5, 5).unwrap();
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        let rook = Piece::new(Color::Black, PieceType::Rook);

        let quiet = Move::new(from, to, pawn, None, MoveKind::Normal, None);
        let capture = Move::new(from, to, pawn, Some(rook), MoveKind::Normal, None);

        assert!(!quiet.is_capture());
        assert!(capture.is_capture());
    }
}
