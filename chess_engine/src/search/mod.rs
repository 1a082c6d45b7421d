//! Iterative-deepening negamax with alpha-beta pruning, null-move pruning,
//! and a quiescence search at the leaves.

use chess_core::{board::fingerprint, Board, Color, Move};

use crate::{
    evaluation::{self, is_endgame},
    move_ordering::{mvv_lva, MoveOrderer},
    score::Score,
    transposition_table::{TranspositionEntry, TranspositionFlag, TranspositionTable},
};

const QUIESCENCE_DEPTH: u32 = 4;
const NULL_MOVE_MIN_DEPTH: u32 = 3;
const NULL_MOVE_REDUCTION: u32 = 2;

pub struct Search<'a> {
    tt: &'a mut TranspositionTable,
    orderer: MoveOrderer,
    nodes_searched: u64,
}

pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes_searched: u64,
}

impl<'a> Search<'a> {
    pub fn new(tt: &'a mut TranspositionTable) -> Self {
        Self {
            tt,
            orderer: MoveOrderer::new(),
            nodes_searched: 0,
        }
    }

    /// Iterative deepening from depth 1 up to and including `max_depth`.
    /// Returns the best move found at the last depth that completed.
    pub fn best_move(&mut self, board: &Board, side_to_move: Color, max_depth: u32) -> SearchResult {
        self.nodes_searched = 0;
        self.orderer.clear_killers();

        let mut result = SearchResult {
            best_move: None,
            score: Score(0),
            nodes_searched: 0,
        };

        for depth in 1..=max_depth.max(1) {
            let (score, best_move) = self.negamax_root(board, depth, side_to_move);

            if let Some(m) = best_move {
                result.best_move = Some(m);
                result.score = score;
            }

            log::debug!(
                "completed depth {depth}: {} nodes, best score {score}",
                self.nodes_searched
            );
        }

        result.nodes_searched = self.nodes_searched;
        result
    }

    fn negamax_root(&mut self, board: &Board, depth: u32, side: Color) -> (Score, Option<Move>) {
        let mut moves = chess_core::legal_moves_raw(board, side);
        if moves.is_empty() {
            return (Score(0), None);
        }

        let key = fingerprint(board, side);
        let tt_move = self.tt.get(key).and_then(|entry| entry.best_move);
        self.orderer.order_moves(0, tt_move, &mut moves);

        let mut alpha = -Score::INF;
        let beta = Score::INF;
        let mut best_move = moves[0];

        for m in moves {
            let mut next = board.copy();
            next.apply(m);
            let score = -self.negamax(&next, depth - 1, -beta, -alpha, side.flip(), 1);

            if score > alpha {
                alpha = score;
                best_move = m;
            }
        }

        (alpha, Some(best_move))
    }

    #[allow(clippy::too_many_arguments)]
    fn negamax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        side: Color,
        ply: u32,
    ) -> Score {
        self.nodes_searched += 1;

        let key = fingerprint(board, side);
        if let Some(entry) = self.tt.get(key) {
            if entry.depth >= depth {
                match entry.flag {
                    TranspositionFlag::Exact => return entry.score,
                    TranspositionFlag::LowerBound if entry.score > alpha => alpha = entry.score,
                    TranspositionFlag::UpperBound if entry.score < beta => beta = entry.score,
                    _ => {}
                }
                if alpha >= beta {
                    return entry.score;
                }
            }
        }

        if depth == 0 {
            return self.quiescence(board, QUIESCENCE_DEPTH, alpha, beta, side);
        }

        let mut moves = chess_core::legal_moves_raw(board, side);
        if moves.is_empty() {
            return if board.is_in_check(side) {
                Score::mated_in(ply)
            } else {
                Score(0)
            };
        }

        if depth >= NULL_MOVE_MIN_DEPTH && !is_endgame(board) && !board.is_in_check(side) {
            let reduced = depth - 1 - NULL_MOVE_REDUCTION;
            let null_score =
                -self.negamax(board, reduced, -beta, -beta + Score(1), side.flip(), ply + 1);
            if null_score >= beta {
                return beta;
            }
        }

        let tt_move = self.tt.get(key).and_then(|entry| entry.best_move);
        self.orderer.order_moves(ply, tt_move, &mut moves);

        let original_alpha = alpha;
        let mut best_score = -Score::INF;
        let mut best_move = None;

        for m in moves {
            let mut next = board.copy();
            next.apply(m);
            let score = -self.negamax(&next, depth - 1, -beta, -alpha, side.flip(), ply + 1);

            if score > best_score {
                best_score = score;
                best_move = Some(m);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                if !m.is_capture() {
                    self.orderer.store_killer(ply, m);
                }
                break;
            }
        }

        let flag = if best_score <= original_alpha {
            TranspositionFlag::UpperBound
        } else if best_score >= beta {
            TranspositionFlag::LowerBound
        } else {
            TranspositionFlag::Exact
        };

        self.tt.store(
            key,
            TranspositionEntry {
                flag,
                depth,
                score: best_score,
                best_move,
            },
        );

        best_score
    }

    fn quiescence(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        beta: Score,
        side: Color,
    ) -> Score {
        self.nodes_searched += 1;

        let stand_pat = evaluation::evaluate(board, side, is_endgame(board));
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }
        if depth == 0 {
            return alpha;
        }

        let mut captures: Vec<Move> = chess_core::legal_moves_raw(board, side)
            .into_iter()
            .filter(Move::is_capture)
            .collect();
        captures.sort_by_cached_key(|m| {
            let captured = m.captured.expect("filtered to captures");
            -mvv_lva(captured.kind(), m.moved.kind())
        });

        for m in captures {
            let mut next = board.copy();
            next.apply(m);
            let score = -self.quiescence(&next, depth - 1, -beta, -alpha, side.flip());

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
