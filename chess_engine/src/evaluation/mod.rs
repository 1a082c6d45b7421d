//! Static position evaluation.

pub mod piece_tables;

use chess_core::{Board, Color, PieceType, Square};

use crate::score::Score;

const CENTRE_SQUARES: [(u8, u8); 4] = [(3, 3), (3, 4), (4, 3), (4, 4)];
const PAWN_SHIELD_BONUS: i32 = 15;
const OPPONENT_MATERIAL_THRESHOLD: i32 = 1_000;

/// True once few enough pieces remain that king safety/activity trade
/// places in priority -- used both to pick the king PST and to gate the
/// pawn-shield bonus.
pub fn is_endgame(board: &Board) -> bool {
    board.pieces().count() <= 12
}

/// Static evaluation from `side_to_move`'s perspective: positive is good
/// for the side to move.
pub fn evaluate(board: &Board, side_to_move: Color, endgame: bool) -> Score {
    let mut score = 0;

    for (square, piece) in board.pieces() {
        let sign = if piece.color().is_white() { 1 } else { -1 };

        score += piece.kind().material_value() * 100 * sign;

        let pst_square = if piece.color().is_white() {
            square
        } else {
            piece_tables::mirror(square)
        };
        score += piece_tables::piece_square_value(piece.kind(), pst_square, endgame) * sign;
    }

    score += centre_control_bonus(board);
    score += king_safety_bonus(board, Color::White) - king_safety_bonus(board, Color::Black);

    let white_relative = Score(score);
    if side_to_move.is_white() {
        white_relative
    } else {
        -white_relative
    }
}

fn centre_control_bonus(board: &Board) -> i32 {
    let mut bonus = 0;
    for (row, col) in CENTRE_SQUARES {
        let square = Square::new(row, col).expect("centre squares are always in range");
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        let sign = if piece.color().is_white() { 1 } else { -1 };
        bonus += if piece.is_pawn() { 20 } else { 10 } * sign;
    }
    bonus
}

/// Pawn-shield bonus: up to three squares one rank in front of the king,
/// only while the opponent still has meaningful attacking material.
fn king_safety_bonus(board: &Board, color: Color) -> i32 {
    if opponent_material(board, color) <= OPPONENT_MATERIAL_THRESHOLD {
        return 0;
    }

    let king_square = board.king_square(color);
    let direction = color.pawn_direction();

    let mut bonus = 0;
    for delta_col in [-1, 0, 1] {
        if let Some(shield_square) = king_square.offset(direction, delta_col) {
            if matches!(
                board.piece_at(shield_square),
                Some(p) if p.color() == color && p.is_pawn()
            ) {
                bonus += PAWN_SHIELD_BONUS;
            }
        }
    }
    bonus
}

/// Total material (in centipawns, excluding pawns and the king) held by
/// the side opposing `color` -- used to decide whether it's even worth
/// rewarding king safety.
fn opponent_material(board: &Board, color: Color) -> i32 {
    board
        .pieces()
        .filter(|(_, piece)| piece.color() != color)
        .filter(|(_, piece)| !matches!(piece.kind(), PieceType::Pawn | PieceType::King))
        .map(|(_, piece)| piece.kind().material_value() * 100)
        .sum()
}
