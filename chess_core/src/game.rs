//! `GameState`: sequences moves over a [`Board`], tracking history and
//! terminal status.

use crate::board::{fingerprint, Board, Color, Move, PieceType, Square, ZobristHash};
use crate::move_gen::{self, MoveVec};

/// How the game ended, or that it hasn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    WhiteMatesBlack,
    BlackMatesWhite,
    Stalemate,
    DrawFiftyMove,
    DrawThreefold,
    DrawInsufficientMaterial,
    DrawAgreement,
    WhiteResigned,
    BlackResigned,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }

    /// A short human-readable description, suitable for a status bar.
    pub fn message(self) -> &'static str {
        match self {
            Status::InProgress => "in progress",
            Status::WhiteMatesBlack => "checkmate -- White wins",
            Status::BlackMatesWhite => "checkmate -- Black wins",
            Status::Stalemate => "draw by stalemate",
            Status::DrawFiftyMove => "draw by the fifty-move rule",
            Status::DrawThreefold => "draw by threefold repetition",
            Status::DrawInsufficientMaterial => "draw by insufficient material",
            Status::DrawAgreement => "draw by agreement",
            Status::WhiteResigned => "White resigned -- Black wins",
            Status::BlackResigned => "Black resigned -- White wins",
        }
    }
}

/// A full game in progress: the board, whose turn it is, and everything
/// needed to resolve draw rules and render a move list.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_history: Vec<Move>,
    position_history: Vec<ZobristHash>,
    half_move_clock: u32,
    full_move_number: u32,
    legal_moves: MoveVec,
    status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let board = Board::starting_position();
        let side_to_move = Color::White;
        let legal_moves = move_gen::legal_moves(&board, side_to_move);
        Self {
            board,
            side_to_move,
            move_history: Vec::new(),
            position_history: vec![fingerprint(&board, side_to_move)],
            half_move_clock: 0,
            full_move_number: 1,
            legal_moves,
            status: Status::InProgress,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.side_to_move
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn legal_moves_from(&self, square: Square) -> MoveVec {
        let mut result = MoveVec::new();
        for &m in self.legal_moves.iter().filter(|m| m.from == square) {
            result.push(m);
        }
        result
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    pub fn move_number(&self) -> u32 {
        self.full_move_number
    }

    /// Applies `m` if it is one of the currently cached legal moves.
    ///
    /// Returns `false` (and makes no change) if the game is already over or
    /// `m` is not legal in the current position.
    pub fn apply(&mut self, m: Move) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        let Some(&legal_move) = self.legal_moves.iter().find(|candidate| **candidate == m) else {
            return false;
        };

        if legal_move.moved.kind() == PieceType::Pawn || legal_move.is_capture() {
            self.half_move_clock = 0;
        } else {
            self.half_move_clock += 1;
        }

        let mover = self.side_to_move;
        self.board.apply(legal_move);
        self.move_history.push(legal_move);

        if mover == Color::Black {
            self.full_move_number += 1;
        }
        self.side_to_move = mover.flip();

        self.position_history.push(fingerprint(&self.board, self.side_to_move));
        self.legal_moves = move_gen::legal_moves(&self.board, self.side_to_move);
        self.status = self.resolve_status(mover);

        true
    }

    pub fn resign(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = match self.side_to_move {
            Color::White => Status::WhiteResigned,
            Color::Black => Status::BlackResigned,
        };
        true
    }

    pub fn agree_draw(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = Status::DrawAgreement;
        true
    }

    fn resolve_status(&self, just_moved: Color) -> Status {
        if self.legal_moves.is_empty() {
            return if self.board.is_in_check(self.side_to_move) {
                match just_moved {
                    Color::White => Status::WhiteMatesBlack,
                    Color::Black => Status::BlackMatesWhite,
                }
            } else {
                Status::Stalemate
            };
        }

        if self.half_move_clock >= 100 {
            return Status::DrawFiftyMove;
        }

        let current = *self.position_history.last().unwrap();
        let repetitions = self.position_history.iter().filter(|&&fp| fp == current).count();
        if repetitions >= 3 {
            return Status::DrawThreefold;
        }

        if insufficient_material(&self.board) {
            return Status::DrawInsufficientMaterial;
        }

        Status::InProgress
    }
}

/// True if neither side has enough material to possibly deliver checkmate.
fn insufficient_material(board: &Board) -> bool {
    let mut white_minors = Vec::new();
    let mut black_minors = Vec::new();

    for (square, piece) in board.pieces() {
        match piece.kind() {
            PieceType::Pawn | PieceType::Rook | PieceType::Queen => return false,
            PieceType::King => {}
            PieceType::Knight | PieceType::Bishop => {
                let minors = if piece.color() == Color::White {
                    &mut white_minors
                } else {
                    &mut black_minors
                };
                minors.push((piece.kind(), square.is_light()));
            }
        }
    }

    if white_minors.len() > 1 || black_minors.len() > 1 {
        return false;
    }

    match (white_minors.as_slice(), black_minors.as_slice()) {
        ([], []) => true,
        ([_], []) | ([], [_]) => true,
        ([(PieceType::Bishop, white_light)], [(PieceType::Bishop, black_light)]) => {
            white_light == black_light
        }
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    fn apply_algebraic(game: &mut GameState, mv: &str) {
        let from: Square = mv[0..2].parse().unwrap();
        let to: Square = mv[2..4].parse().unwrap();
        let candidate = *game
            .legal_moves()
            .iter()
            .find(|m| m.from == from && m.to == to)
            .unwrap_or_else(|| panic!("no legal move {mv} in position"));
        assert!(game.apply(candidate));
    }

    #[test]
    fn new_game_has_twenty_moves_for_white() {
        let game = GameState::new();
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.current_turn(), Color::White);
    }

    #[test]
    fn fools_mate_ends_in_checkmate() {
        let mut game = GameState::new();
        apply_algebraic(&mut game, "f2f3");
        apply_algebraic(&mut game, "e7e5");
        apply_algebraic(&mut game, "g2g4");
        apply_algebraic(&mut game, "d8h4");

        assert_eq!(game.status(), Status::BlackMatesWhite);
        assert!(game.legal_moves().is_empty());
        assert!(!game.apply(*game.move_history().last().unwrap()));
    }

    #[test]
    fn resign_is_terminal_and_blocks_further_moves() {
        let mut game = GameState::new();
        assert!(game.resign());
        assert_eq!(game.status(), Status::WhiteResigned);
        assert!(!game.agree_draw());
    }

    #[test]
    fn insufficient_material_king_vs_king() {
        let mut squares = [None; 64];
        squares[Square::new(0, 4).unwrap().index()] = Some(crate::board::Piece::new(Color::White, PieceType::King));
        squares[Square::new(7, 4).unwrap().index()] = Some(crate::board::Piece::new(Color::Black, PieceType::King));
        let board = crate::board::test_support::board_from_squares(
            squares,
            Square::new(0, 4).unwrap(),
            Square::new(7, 4).unwrap(),
        );
        assert!(insufficient_material(&board));
    }

    #[test]
    fn reset_restores_starting_position() {
        let mut game = GameState::new();
        apply_algebraic(&mut game, "e2e4");
        game.reset();
        assert_eq!(game.move_history().len(), 0);
        assert_eq!(game.current_turn(), Color::White);
    }
}
