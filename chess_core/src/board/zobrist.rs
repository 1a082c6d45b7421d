use std::{
    fmt::Debug,
    ops::{BitXor, BitXorAssign},
    sync::OnceLock,
};

use rand::{RngCore, SeedableRng};

use super::{Castling, Color, Piece, PieceType, Square};

/// A 64-bit fingerprint of a position: the board placement, side to move,
/// castling rights, and en-passant target, folded together by XOR.
///
/// Used both for threefold-repetition detection ([`position_history`] in
/// [`crate::GameState`]) and as the transposition-table key -- the same
/// construction serves both, since both need exactly "positions that are
/// equivalent for the purposes of the rules".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ZobristHash(pub u64);

impl ZobristHash {
    pub fn piece(piece: Piece, square: Square) -> Self {
        let table = ZobristTable::get();
        let kind_index = piece_kind_index(piece.kind());
        let color_index = piece.color().index();
        Self(table.pieces[(color_index * 6 + kind_index) * 64 + square.index()])
    }

    pub fn side_to_move(color: Color) -> Self {
        match color {
            Color::White => Self(0),
            Color::Black => Self(ZobristTable::get().black_to_move),
        }
    }

    pub fn castling(castling: Castling) -> Self {
        Self(ZobristTable::get().castling[castling.bits() as usize])
    }

    pub fn en_passant(en_passant: Option<Square>) -> Self {
        match en_passant {
            Some(square) => Self(ZobristTable::get().en_passant[square.col() as usize]),
            None => Self(0),
        }
    }

    pub fn toggle_piece(&mut self, piece: Piece, square: Square) {
        *self ^= Self::piece(piece, square);
    }
}

fn piece_kind_index(kind: PieceType) -> usize {
    match kind {
        PieceType::Pawn => 0,
        PieceType::Knight => 1,
        PieceType::Bishop => 2,
        PieceType::Rook => 3,
        PieceType::Queen => 4,
        PieceType::King => 5,
    }
}

impl BitXor for ZobristHash {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for ZobristHash {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

struct ZobristTable {
    pieces: [u64; 12 * 64],
    black_to_move: u64,
    castling: [u64; 16],
    en_passant: [u64; 8],
}

impl ZobristTable {
    fn new() -> Self {
        // Fixed seed: the hash only needs to be *stable within a process*
        // (it's never persisted or compared across builds), so a
        // deterministic table makes tests reproducible.
        let mut rng = rand_chacha::ChaCha12Rng::from_seed([
            0x94, 0xaa, 0x13, 0x7c, 0xe3, 0x62, 0xaf, 0x0d, 0x3f, 0xb2, 0x3b, 0xba, 0x78, 0xe2,
            0x21, 0x18, 0xf0, 0xc3, 0xbd, 0xb3, 0x59, 0xac, 0x84, 0x13, 0x17, 0x58, 0x01, 0x54,
            0x54, 0x72, 0xd2, 0xc3,
        ]);

        let mut pieces = [0u64; 12 * 64];
        pieces.fill_with(|| rng.next_u64());

        let black_to_move = rng.next_u64();

        let mut castling = [0u64; 16];
        castling.fill_with(|| rng.next_u64());

        let mut en_passant = [0u64; 8];
        en_passant.fill_with(|| rng.next_u64());

        Self {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    fn get() -> &'static Self {
        static INSTANCE: OnceLock<ZobristTable> = OnceLock::new();
        INSTANCE.get_or_init(Self::new)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn xor_is_its_own_inverse() {
        let a = ZobristHash::piece(Piece::new(Color::White, PieceType::Pawn), Square::new(1, 0).unwrap());
        let b = ZobristHash::piece(Piece::new(Color::Black, PieceType::Queen), Square::new(7, 3).unwrap());

        let combined = a ^ b;
        assert_eq!(combined ^ b, a);
        assert_eq!(combined ^ a, b);
    }

    #[test]
    fn distinct_squares_hash_differently() {
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        let a = ZobristHash::piece(pawn, Square::new(1, 0).unwrap());
        let b = ZobristHash::piece(pawn, Square::new(1, 1).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn side_to_move_differs_by_color() {
        assert_ne!(
            ZobristHash::side_to_move(Color::White),
            ZobristHash::side_to_move(Color::Black)
        );
    }
}
