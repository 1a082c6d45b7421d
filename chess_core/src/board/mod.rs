//! The board: piece placement, move application, and attack queries.

mod castling;
mod move_repr;
mod piece;
mod square;
mod zobrist;

pub use castling::{king_start, kingside_rook_start, queenside_rook_start, Castling};
pub use move_repr::{Move, MoveKind};
pub use piece::{Color, Piece, PieceType};
pub use square::{ParseSquareError, Square};
pub use zobrist::ZobristHash;

/// Knight-move offsets, as (delta_row, delta_col) pairs.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// King-move (and queen/rook/bishop ray) offsets.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// A chess board: a 64-square placement grid plus the handful of scalars
/// needed to apply moves correctly (cached king squares, the en-passant
/// target).
///
/// A `Board` does **not** know whose turn it is, how many moves have been
/// played, or whether the game is over -- that's [`crate::GameState`]'s job.
/// `Board` is the cheap-to-copy value that search recurses over: [`apply`]
/// mutates in place and does no legality checking, so callers (move
/// generation, in practice) are expected to only ever apply moves they
/// already know are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    en_passant_target: Option<Square>,
    white_king_square: Square,
    black_king_square: Square,
}

impl Board {
    /// The standard chess starting position.
    pub fn starting_position() -> Self {
        use Color::*;
        use PieceType::*;

        let mut squares = [None; 64];

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, kind) in back_rank.into_iter().enumerate() {
            squares[Square::new(0, col as u8).unwrap().index()] = Some(Piece::new(White, kind));
            squares[Square::new(7, col as u8).unwrap().index()] = Some(Piece::new(Black, kind));
        }
        for col in 0..8 {
            squares[Square::new(1, col).unwrap().index()] = Some(Piece::new(White, Pawn));
            squares[Square::new(6, col).unwrap().index()] = Some(Piece::new(Black, Pawn));
        }

        Self {
            squares,
            en_passant_target: None,
            white_king_square: Square::new(0, 4).unwrap(),
            black_king_square: Square::new(7, 4).unwrap(),
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_square,
            Color::Black => self.black_king_square,
        }
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// An independent copy; mutating the copy never affects `self`.
    ///
    /// `Board` is `Copy`, so this is exactly `*self` -- named explicitly to
    /// make the intent at call sites (mostly move generation and search)
    /// obvious.
    pub fn copy(&self) -> Self {
        *self
    }

    /// Iterates over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Castling rights still available to `color`, derived from whether the
    /// king and the relevant rook have moved (and whether the rook is still
    /// present and of the right color).
    pub fn castling_rights(&self, color: Color) -> Castling {
        let mut rights = Castling::empty();

        let king_moved = self
            .piece_at(king_start(color))
            .map(|p| p.color() != color || !p.is_king() || p.has_moved())
            .unwrap_or(true);

        if !king_moved {
            if self.rook_available(color, kingside_rook_start(color)) {
                rights |= Castling::kingside(color);
            }
            if self.rook_available(color, queenside_rook_start(color)) {
                rights |= Castling::queenside(color);
            }
        }

        rights
    }

    fn rook_available(&self, color: Color, square: Square) -> bool {
        matches!(
            self.piece_at(square),
            Some(p) if p.color() == color && p.kind() == PieceType::Rook && !p.has_moved()
        )
    }

    /// Applies a move in place. Does **not** validate legality -- the
    /// caller (move generation, or a `GameState` that has already checked
    /// the move is legal) is responsible for only ever applying legal
    /// moves.
    pub fn apply(&mut self, m: Move) {
        let moved_piece = m.moved.with_has_moved(true);

        match m.kind {
            MoveKind::Normal => {
                self.set(m.from, None);
                self.set(m.to, Some(moved_piece));
                self.en_passant_target = None;
            }
            MoveKind::DoublePawnPush => {
                self.set(m.from, None);
                self.set(m.to, Some(moved_piece));
                let skipped_row = (m.from.row() as i8 + m.to.row() as i8) / 2;
                self.en_passant_target = Square::new(skipped_row as u8, m.from.col());
            }
            MoveKind::EnPassant => {
                self.set(m.from, None);
                self.set(m.to, Some(moved_piece));
                let captured_square = Square::new(m.from.row(), m.to.col()).unwrap();
                self.set(captured_square, None);
                self.en_passant_target = None;
            }
            MoveKind::Promotion => {
                let promoted = Piece::new(m.moved.color(), m.promotion.unwrap()).with_has_moved(true);
                self.set(m.from, None);
                self.set(m.to, Some(promoted));
                self.en_passant_target = None;
            }
            MoveKind::CastlingKingside | MoveKind::CastlingQueenside => {
                self.set(m.from, None);
                self.set(m.to, Some(moved_piece));

                let color = m.moved.color();
                let (rook_from, rook_to) = match m.kind {
                    MoveKind::CastlingKingside => (
                        kingside_rook_start(color),
                        Square::new(color.back_rank(), 5).unwrap(),
                    ),
                    MoveKind::CastlingQueenside => (
                        queenside_rook_start(color),
                        Square::new(color.back_rank(), 3).unwrap(),
                    ),
                    _ => unreachable!(),
                };
                let rook = self.piece_at(rook_from).expect("castling rook must be present");
                self.set(rook_from, None);
                self.set(rook_to, Some(rook.with_has_moved(true)));

                self.en_passant_target = None;
            }
        }

        if m.moved.is_king() {
            match m.moved.color() {
                Color::White => self.white_king_square = m.to,
                Color::Black => self.black_king_square = m.to,
            }
        }
    }

    /// True if `square` is attacked by any piece of `by_color`.
    pub fn square_attacked(&self, square: Square, by_color: Color) -> bool {
        // Pawns: probed from the defender's perspective -- a pawn attacks
        // diagonally forward, so we look one row *behind* (from the
        // attacker's point of view) in both diagonal directions.
        let pawn_row_delta = -by_color.pawn_direction();
        for delta_col in [-1, 1] {
            if let Some(probe) = square.offset(pawn_row_delta, delta_col) {
                if matches!(
                    self.piece_at(probe),
                    Some(p) if p.color() == by_color && p.kind() == PieceType::Pawn
                ) {
                    return true;
                }
            }
        }

        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(probe) = square.offset(dr, dc) {
                if matches!(
                    self.piece_at(probe),
                    Some(p) if p.color() == by_color && p.kind() == PieceType::Knight
                ) {
                    return true;
                }
            }
        }

        for (dr, dc) in KING_OFFSETS {
            if let Some(probe) = square.offset(dr, dc) {
                if matches!(
                    self.piece_at(probe),
                    Some(p) if p.color() == by_color && p.kind() == PieceType::King
                ) {
                    return true;
                }
            }
        }

        for (dr, dc) in ROOK_RAYS {
            if self.ray_hits(square, dr, dc, by_color, [PieceType::Rook, PieceType::Queen]) {
                return true;
            }
        }

        for (dr, dc) in BISHOP_RAYS {
            if self.ray_hits(square, dr, dc, by_color, [PieceType::Bishop, PieceType::Queen]) {
                return true;
            }
        }

        false
    }

    fn ray_hits(
        &self,
        from: Square,
        dr: i8,
        dc: i8,
        by_color: Color,
        matching: [PieceType; 2],
    ) -> bool {
        let mut probe = from;
        while let Some(next) = probe.offset(dr, dc) {
            probe = next;
            match self.piece_at(probe) {
                None => continue,
                Some(p) if p.color() == by_color && matching.contains(&p.kind()) => return true,
                Some(_) => return false,
            }
        }
        false
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.square_attacked(self.king_square(color), color.flip())
    }
}

/// Position fingerprint used both for threefold-repetition and as the
/// transposition-table key. See [`ZobristHash`] for the construction.
pub fn fingerprint(board: &Board, side_to_move: Color) -> ZobristHash {
    let mut hash = ZobristHash::default();
    for (square, piece) in board.pieces() {
        hash.toggle_piece(piece, square);
    }
    hash ^= ZobristHash::side_to_move(side_to_move);
    hash ^= ZobristHash::castling(board.castling_rights(Color::White) | board.castling_rights(Color::Black));
    hash ^= ZobristHash::en_passant(board.en_passant_target());
    hash
}

/// Board constructors for hand-built positions, used by tests in this
/// crate and in `chess_engine` that need something other than the starting
/// position.
pub mod test_support {
    use super::*;

    pub fn board_from_squares(
        squares: [Option<Piece>; 64],
        white_king_square: Square,
        black_king_square: Square,
    ) -> Board {
        Board {
            squares,
            en_passant_target: None,
            white_king_square,
            black_king_square,
        }
    }

    impl Board {
        pub fn set_en_passant_target_for_test(&mut self, target: Option<Square>) {
            self.en_passant_target = target;
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starting_position_has_one_king_each() {
        let board = Board::starting_position();
        assert_eq!(board.king_square(Color::White), Square::new(0, 4).unwrap());
        assert_eq!(board.king_square(Color::Black), Square::new(7, 4).unwrap());
        assert_eq!(board.piece_at(Square::new(0, 4).unwrap()).unwrap().kind(), PieceType::King);
    }

    #[test]
    fn copy_is_independent() {
        let board = Board::starting_position();
        let mut copy = board.copy();

        let from = Square::new(1, 4).unwrap();
        let to = Square::new(3, 4).unwrap();
        let pawn = board.piece_at(from).unwrap();
        copy.apply(Move::new(from, to, pawn, None, MoveKind::DoublePawnPush, None));

        assert!(board.piece_at(from).is_some());
        assert!(copy.piece_at(from).is_none());
    }

    #[test]
    fn double_pawn_push_sets_en_passant_target() {
        let mut board = Board::starting_position();
        let from = Square::new(1, 4).unwrap();
        let to = Square::new(3, 4).unwrap();
        let pawn = board.piece_at(from).unwrap();
        board.apply(Move::new(from, to, pawn, None, MoveKind::DoublePawnPush, None));

        assert_eq!(board.en_passant_target(), Square::new(2, 4));
    }

    #[test]
    fn non_double_push_clears_en_passant_target() {
        let mut board = Board::starting_position();
        let from = Square::new(1, 4).unwrap();
        let to = Square::new(3, 4).unwrap();
        let pawn = board.piece_at(from).unwrap();
        board.apply(Move::new(from, to, pawn, None, MoveKind::DoublePawnPush, None));
        assert!(board.en_passant_target().is_some());

        let from2 = Square::new(6, 0).unwrap();
        let to2 = Square::new(5, 0).unwrap();
        let black_pawn = board.piece_at(from2).unwrap();
        board.apply(Move::new(from2, to2, black_pawn, None, MoveKind::Normal, None));
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn en_passant_removes_captured_pawn() {
        let mut board = Board::starting_position();
        // White plays e4.
        let e2 = Square::new(1, 4).unwrap();
        let e4 = Square::new(3, 4).unwrap();
        let wp = board.piece_at(e2).unwrap();
        board.apply(Move::new(e2, e4, wp, None, MoveKind::DoublePawnPush, None));
        // White pawn "advances" to e5 for this unit test by direct apply.
        let e5 = Square::new(4, 4).unwrap();
        board.apply(Move::new(e4, e5, wp, None, MoveKind::Normal, None));

        // Black plays d5.
        let d7 = Square::new(6, 3).unwrap();
        let d5 = Square::new(4, 3).unwrap();
        let bp = board.piece_at(d7).unwrap();
        board.apply(Move::new(d7, d5, bp, None, MoveKind::DoublePawnPush, None));
        assert_eq!(board.en_passant_target(), Square::new(5, 3));

        // White captures en passant: e5xd6.
        let d6 = Square::new(5, 3).unwrap();
        board.apply(Move::new(e5, d6, wp, Some(bp), MoveKind::EnPassant, None));

        assert!(board.piece_at(d5).is_none());
        assert!(board.piece_at(d6).is_some());
    }

    #[test]
    fn castling_moves_both_pieces() {
        let mut board = Board::starting_position();
        for sq in [Square::new(0, 5).unwrap(), Square::new(0, 6).unwrap()] {
            board.set(sq, None);
        }

        let king = board.piece_at(Square::new(0, 4).unwrap()).unwrap();
        board.apply(Move::new(
            Square::new(0, 4).unwrap(),
            Square::new(0, 6).unwrap(),
            king,
            None,
            MoveKind::CastlingKingside,
            None,
        ));

        assert_eq!(board.king_square(Color::White), Square::new(0, 6).unwrap());
        assert!(board.piece_at(Square::new(0, 5).unwrap()).unwrap().kind() == PieceType::Rook);
        assert!(board.piece_at(Square::new(0, 7).unwrap()).is_none());
    }

    #[test]
    fn castling_rights_require_unmoved_king_and_rook() {
        let board = Board::starting_position();
        assert_eq!(board.castling_rights(Color::White), Castling::WHITE);

        let mut moved = board;
        let e1 = Square::new(0, 4).unwrap();
        let king = moved.piece_at(e1).unwrap();
        moved.apply(Move::new(e1, Square::new(1, 4).unwrap(), king, None, MoveKind::Normal, None));
        assert!(moved.castling_rights(Color::White).is_empty());
    }

    #[test]
    fn square_attacked_detects_sliders_and_leapers() {
        let mut board = Board::starting_position();
        // Clear the board except for a white rook and a black king.
        board = Board {
            squares: [None; 64],
            en_passant_target: None,
            white_king_square: Square::new(0, 0).unwrap(),
            black_king_square: Square::new(7, 7).unwrap(),
        };
        board.set(Square::new(0, 0).unwrap(), Some(Piece::new(Color::White, PieceType::King)));
        board.set(Square::new(7, 7).unwrap(), Some(Piece::new(Color::Black, PieceType::King)));
        board.set(Square::new(4, 0).unwrap(), Some(Piece::new(Color::White, PieceType::Rook)));

        assert!(board.square_attacked(Square::new(4, 4).unwrap(), Color::White));
        assert!(!board.square_attacked(Square::new(5, 4).unwrap(), Color::White));
    }
}
