//! Move generation: pseudo-legal moves per piece, and the king-safety filter
//! that turns them into legal moves.

use arrayvec::ArrayVec;

use crate::board::{Board, Castling, Color, Move, MoveKind, Piece, PieceType, Square};

/// Legal moves never exceed 218 in any reachable position; pseudo-legal
/// lists from a single square are always far smaller, so the same
/// fixed-capacity type covers both without ever spilling to the heap.
pub type MoveVec = ArrayVec<Move, 218>;

const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

/// Pseudo-legal moves for the piece on `square`, ignoring whether the move
/// would leave the mover's own king in check.
///
/// Returns an empty list if `square` is empty or holds a piece of the wrong
/// color.
pub fn pseudo_legal_moves_from(board: &Board, square: Square, color: Color) -> MoveVec {
    let mut moves = MoveVec::new();

    let Some(piece) = board.piece_at(square) else {
        return moves;
    };
    if piece.color() != color {
        return moves;
    }

    match piece.kind() {
        PieceType::Pawn => pawn_moves(board, square, piece, &mut moves),
        PieceType::Knight => leaper_moves(board, square, piece, &KNIGHT_OFFSETS, &mut moves),
        PieceType::King => {
            leaper_moves(board, square, piece, &KING_OFFSETS, &mut moves);
            castling_moves(board, square, piece, &mut moves);
        }
        PieceType::Bishop => slider_moves(board, square, piece, &BISHOP_RAYS, &mut moves),
        PieceType::Rook => slider_moves(board, square, piece, &ROOK_RAYS, &mut moves),
        PieceType::Queen => {
            slider_moves(board, square, piece, &ROOK_RAYS, &mut moves);
            slider_moves(board, square, piece, &BISHOP_RAYS, &mut moves);
        }
    }

    moves
}

fn pawn_moves(board: &Board, from: Square, piece: Piece, moves: &mut MoveVec) {
    let color = piece.color();
    let direction = color.pawn_direction();
    let promotion_row = color.promotion_row();

    // Single and double push.
    if let Some(one_ahead) = from.offset(direction, 0) {
        if board.piece_at(one_ahead).is_none() {
            push_pawn_move(from, one_ahead, piece, None, MoveKind::Normal, promotion_row, moves);

            if from.row() == color.pawn_start_row() {
                if let Some(two_ahead) = from.offset(direction * 2, 0) {
                    if board.piece_at(two_ahead).is_none() {
                        moves.push(Move::new(from, two_ahead, piece, None, MoveKind::DoublePawnPush, None));
                    }
                }
            }
        }
    }

    // Captures, including en passant.
    for delta_col in [-1, 1] {
        let Some(to) = from.offset(direction, delta_col) else {
            continue;
        };

        if let Some(target) = board.piece_at(to) {
            if target.color() != color {
                push_pawn_move(from, to, piece, Some(target), MoveKind::Normal, promotion_row, moves);
            }
        } else if board.en_passant_target() == Some(to) {
            let captured_square = Square::new(from.row(), to.col()).unwrap();
            if let Some(captured) = board.piece_at(captured_square) {
                moves.push(Move::new(from, to, piece, Some(captured), MoveKind::EnPassant, None));
            }
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    kind: MoveKind,
    promotion_row: u8,
    moves: &mut MoveVec,
) {
    if to.row() == promotion_row {
        for promotion in PieceType::PROMOTIONS {
            moves.push(Move::new(from, to, piece, captured, MoveKind::Promotion, Some(promotion)));
        }
    } else {
        moves.push(Move::new(from, to, piece, captured, kind, None));
    }
}

fn leaper_moves(board: &Board, from: Square, piece: Piece, offsets: &[(i8, i8)], moves: &mut MoveVec) {
    for &(dr, dc) in offsets {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        match board.piece_at(to) {
            None => moves.push(Move::new(from, to, piece, None, MoveKind::Normal, None)),
            Some(target) if target.color() != piece.color() => {
                moves.push(Move::new(from, to, piece, Some(target), MoveKind::Normal, None))
            }
            Some(_) => {}
        }
    }
}

fn slider_moves(board: &Board, from: Square, piece: Piece, rays: &[(i8, i8)], moves: &mut MoveVec) {
    for &(dr, dc) in rays {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            current = to;
            match board.piece_at(to) {
                None => {
                    moves.push(Move::new(from, to, piece, None, MoveKind::Normal, None));
                }
                Some(target) if target.color() != piece.color() => {
                    moves.push(Move::new(from, to, piece, Some(target), MoveKind::Normal, None));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}

fn castling_moves(board: &Board, king_square: Square, king: Piece, moves: &mut MoveVec) {
    let color = king.color();
    let opponent = color.flip();
    let rights = board.castling_rights(color);
    let back_rank = color.back_rank();

    if board.is_in_check(color) {
        return;
    }

    if rights.contains(Castling::kingside(color)) {
        let f = Square::new(back_rank, 5).unwrap();
        let g = Square::new(back_rank, 6).unwrap();
        if board.piece_at(f).is_none()
            && board.piece_at(g).is_none()
            && !board.square_attacked(f, opponent)
            && !board.square_attacked(g, opponent)
        {
            moves.push(Move::new(king_square, g, king, None, MoveKind::CastlingKingside, None));
        }
    }

    if rights.contains(Castling::queenside(color)) {
        let d = Square::new(back_rank, 3).unwrap();
        let c = Square::new(back_rank, 2).unwrap();
        let b = Square::new(back_rank, 1).unwrap();
        if board.piece_at(d).is_none()
            && board.piece_at(c).is_none()
            && board.piece_at(b).is_none()
            && !board.square_attacked(d, opponent)
            && !board.square_attacked(c, opponent)
        {
            moves.push(Move::new(king_square, c, king, None, MoveKind::CastlingQueenside, None));
        }
    }
}

/// All legal moves for `color`, with `causes_check` and `causes_checkmate`
/// filled in.
///
/// Cost is quadratic in the branching factor (every check-giving move
/// re-derives whether the opponent has a reply), which is fine for a move
/// list driving a UI or a notation renderer but is deliberately *not* what
/// search uses on its hot path -- see [`legal_moves_raw`].
pub fn legal_moves(board: &Board, color: Color) -> MoveVec {
    let mut moves = legal_moves_raw(board, color);

    for m in moves.iter_mut() {
        if m.causes_check {
            let mut after = board.copy();
            after.apply(*m);
            m.causes_checkmate = legal_moves_raw(&after, color.flip()).is_empty();
        }
    }

    moves
}

/// Legal moves for `color` with `causes_check` set but `causes_checkmate`
/// always `false`. This is what search calls: checkmate detection requires
/// a second full move-generation pass that search has no use for (mate is
/// detected directly from an empty move list plus "in check").
pub fn legal_moves_raw(board: &Board, color: Color) -> MoveVec {
    let mut result = MoveVec::new();

    for square in Square::all() {
        let candidates = pseudo_legal_moves_from(board, square, color);
        for m in candidates {
            let mut after = board.copy();
            after.apply(m);
            if after.is_in_check(color) {
                continue;
            }

            let mut m = m;
            m.causes_check = after.is_in_check(color.flip());
            result.push(m);
        }
    }

    result
}

/// Legal moves originating from a single square (for UI move-highlighting).
pub fn legal_moves_from(board: &Board, square: Square, color: Color) -> MoveVec {
    let mut result = MoveVec::new();
    for m in legal_moves(board, color) {
        if m.from == square {
            result.push(m);
        }
    }
    result
}
