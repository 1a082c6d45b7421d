//! Algebraic-ish notation for moves.
//!
//! This is not full SAN: disambiguation between two pieces of the same kind
//! that could reach the same square is not attempted (other than the
//! standard pawn-capture file prefix). It's enough to render an
//! unambiguous, human-readable move history.

use crate::board::{Move, MoveKind, PieceType};

/// Renders `m` the way it would read in a game transcript: `Nf3`, `exd5`,
/// `O-O`, `e8=Q+`.
pub fn to_algebraic(m: &Move) -> String {
    let suffix = if m.causes_checkmate {
        "#"
    } else if m.causes_check {
        "+"
    } else {
        ""
    };

    let body = match m.kind {
        MoveKind::CastlingKingside => "O-O".to_string(),
        MoveKind::CastlingQueenside => "O-O-O".to_string(),
        _ => {
            let mut body = String::new();

            if m.moved.kind() == PieceType::Pawn {
                if m.is_capture() {
                    body.push(file_letter(m.from.col()));
                    body.push('x');
                }
                body.push_str(&m.to.to_string());
                if let Some(promotion) = m.promotion {
                    body.push('=');
                    body.push(promotion.as_letter());
                }
            } else {
                body.push(m.moved.kind().as_letter());
                if m.is_capture() {
                    body.push('x');
                }
                body.push_str(&m.to.to_string());
            }

            body
        }
    };

    format!("{body}{suffix}")
}

fn file_letter(col: u8) -> char {
    (b'a' + col) as char
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::board::{Color, Piece, Square};

    use super::*;

    #[test]
    fn quiet_knight_move() {
        let m = Move::new(
            Square::new(0, 1).unwrap(),
            Square::new(2, 2).unwrap(),
            Piece::new(Color::White, PieceType::Knight),
            None,
            MoveKind::Normal,
            None,
        );
        assert_eq!(to_algebraic(&m), "Nc3");
    }

    #[test]
    fn pawn_capture_shows_origin_file() {
        let m = Move::new(
            Square::new(3, 4).unwrap(),
            Square::new(4, 3).unwrap(),
            Piece::new(Color::White, PieceType::Pawn),
            Some(Piece::new(Color::Black, PieceType::Pawn)),
            MoveKind::Normal,
            None,
        );
        assert_eq!(to_algebraic(&m), "exd5");
    }

    #[test]
    fn promotion_suffix() {
        let mut m = Move::new(
            Square::new(6, 0).unwrap(),
            Square::new(7, 0).unwrap(),
            Piece::new(Color::White, PieceType::Pawn),
            None,
            MoveKind::Promotion,
            Some(PieceType::Queen),
        );
        m.causes_check = true;
        assert_eq!(to_algebraic(&m), "a8=Q+");
    }

    #[test]
    fn castling() {
        let m = Move::new(
            Square::new(0, 4).unwrap(),
            Square::new(0, 6).unwrap(),
            Piece::new(Color::White, PieceType::King),
            None,
            MoveKind::CastlingKingside,
            None,
        );
        assert_eq!(to_algebraic(&m), "O-O");
    }

    #[test]
    fn checkmate_suffix() {
        let mut m = Move::new(
            Square::new(4, 3).unwrap(),
            Square::new(7, 3).unwrap(),
            Piece::new(Color::White, PieceType::Queen),
            None,
            MoveKind::Normal,
            None,
        );
        m.causes_check = true;
        m.causes_checkmate = true;
        assert_eq!(to_algebraic(&m), "Qd8#");
    }
}
