//! Piece-square tables: per-(kind, square) positional bonuses in
//! centipawns, from White's perspective. Black's contribution mirrors the
//! square vertically before lookup.

use chess_core::{PieceType, Square};

#[rustfmt::skip]
mod tables {
    // Tables below are written rank-8-down-to-rank-1, matching how a board
    // reads on the page. This macro reverses the row order so index 0
    // ends up as a1, matching `Square::index`.
    macro_rules! flipped_8 {
        ($($remaining:expr),* $(,)?) => {
            flipped_8![$($remaining),* , ;]
        };
        (
            $a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr, $g:expr, $h:expr,
            $($remaining:expr,)*
            ;
            $($rest:expr,)*
        ) => {
            flipped_8![
                $($remaining,)*
                ;
                $a, $b, $c, $d, $e, $f, $g, $h,
                $($rest,)*
            ]
        };
        (; $($rest:expr,)*) => {
            [$($rest,)*]
        };
    }

    pub const PAWN: [i32; 64] = flipped_8![
         0,  0,  0,  0,  0,  0,  0,  0,
        50, 50, 50, 50, 50, 50, 50, 50,
        10, 10, 20, 30, 30, 20, 10, 10,
         5,  5, 10, 25, 25, 10,  5,  5,
         0,  0,  0, 20, 20,  0,  0,  0,
         5, -5,-10,  0,  0,-10, -5,  5,
         5, 10, 10,-20,-20, 10, 10,  5,
         0,  0,  0,  0,  0,  0,  0,  0,
    ];

    pub const KNIGHT: [i32; 64] = flipped_8![
        -50,-40,-30,-30,-30,-30,-40,-50,
        -40,-20,  0,  0,  0,  0,-20,-40,
        -30,  0, 10, 15, 15, 10,  0,-30,
        -30,  5, 15, 20, 20, 15,  5,-30,
        -30,  0, 15, 20, 20, 15,  0,-30,
        -30,  5, 10, 15, 15, 10,  5,-30,
        -40,-20,  0,  5,  5,  0,-20,-40,
        -50,-40,-30,-30,-30,-30,-40,-50,
    ];

    pub const BISHOP: [i32; 64] = flipped_8![
        -20,-10,-10,-10,-10,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5, 10, 10,  5,  0,-10,
        -10,  5,  5, 10, 10,  5,  5,-10,
        -10,  0, 10, 10, 10, 10,  0,-10,
        -10, 10, 10, 10, 10, 10, 10,-10,
        -10,  5,  0,  0,  0,  0,  5,-10,
        -20,-10,-10,-10,-10,-10,-10,-20,
    ];

    pub const ROOK: [i32; 64] = flipped_8![
          0,  0,  0,  0,  0,  0,  0,  0,
          5, 10, 10, 10, 10, 10, 10,  5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
         -5,  0,  0,  0,  0,  0,  0, -5,
          0,  0,  0,  5,  5,  0,  0,  0,
    ];

    pub const QUEEN: [i32; 64] = flipped_8![
        -20,-10,-10, -5, -5,-10,-10,-20,
        -10,  0,  0,  0,  0,  0,  0,-10,
        -10,  0,  5,  5,  5,  5,  0,-10,
         -5,  0,  5,  5,  5,  5,  0, -5,
          0,  0,  5,  5,  5,  5,  0, -5,
        -10,  5,  5,  5,  5,  5,  0,-10,
        -10,  0,  5,  0,  0,  0,  0,-10,
        -20,-10,-10, -5, -5,-10,-10,-20,
    ];

    pub const KING_MIDDLEGAME: [i32; 64] = flipped_8![
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -30,-40,-40,-50,-50,-40,-40,-30,
        -20,-30,-30,-40,-40,-30,-30,-20,
        -10,-20,-20,-20,-20,-20,-20,-10,
         20, 20,  0,  0,  0,  0, 20, 20,
         20, 30, 10,  0,  0, 10, 30, 20,
    ];

    pub const KING_ENDGAME: [i32; 64] = flipped_8![
        -50,-40,-30,-20,-20,-30,-40,-50,
        -30,-20,-10,  0,  0,-10,-20,-30,
        -30,-10, 20, 30, 30, 20,-10,-30,
        -30,-10, 30, 40, 40, 30,-10,-30,
        -30,-10, 30, 40, 40, 30,-10,-30,
        -30,-10, 20, 30, 30, 20,-10,-30,
        -30,-30,  0,  0,  0,  0,-30,-30,
        -50,-30,-30,-30,-30,-30,-30,-50,
    ];
}

/// Looks up `kind`'s positional bonus at `square`, from White's
/// perspective (callers must flip the square for Black first).
pub fn piece_square_value(kind: PieceType, square: Square, endgame: bool) -> i32 {
    let table: &[i32; 64] = match kind {
        PieceType::Pawn => &tables::PAWN,
        PieceType::Knight => &tables::KNIGHT,
        PieceType::Bishop => &tables::BISHOP,
        PieceType::Rook => &tables::ROOK,
        PieceType::Queen => &tables::QUEEN,
        PieceType::King if endgame => &tables::KING_ENDGAME,
        PieceType::King => &tables::KING_MIDDLEGAME,
    };
    table[square.index()]
}

/// Mirrors `square` vertically, so Black's pieces look up the same table
/// White does, just from the other side of the board.
pub fn mirror(square: Square) -> Square {
    Square::new(7 - square.row(), square.col()).expect("mirroring stays in range")
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mirror_is_an_involution() {
        for square in Square::all() {
            assert_eq!(mirror(mirror(square)), square);
        }
    }

    #[test]
    fn central_squares_score_higher_than_corners_for_knight() {
        let center = Square::new(3, 3).unwrap();
        let corner = Square::new(0, 0).unwrap();
        assert!(
            piece_square_value(PieceType::Knight, center, false)
                > piece_square_value(PieceType::Knight, corner, false)
        );
    }
}
