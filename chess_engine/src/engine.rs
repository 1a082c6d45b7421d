//! The public façade: pick a difficulty, hand it a [`GameState`], get a
//! move back.

use chess_core::{GameState, Move};

use crate::{score::Score, search::Search, transposition_table::TranspositionTable};

const DEFAULT_TT_SIZE_MB: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    fn search_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }
}

/// Owns the transposition table across calls, so repeated `best_move`
/// calls within one game benefit from the cache the last call left behind.
pub struct Engine {
    difficulty: Difficulty,
    tt: TranspositionTable,
    nodes_searched: u64,
    last_score: Score,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Difficulty::Medium)
    }
}

impl Engine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            tt: TranspositionTable::new(DEFAULT_TT_SIZE_MB),
            nodes_searched: 0,
            last_score: Score(0),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    pub fn last_score(&self) -> Score {
        self.last_score
    }

    /// The chosen move, or `None` if `state` has no legal moves (the
    /// caller should not be asking -- the game is already over).
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        if state.status().is_terminal() {
            return None;
        }

        let board = state.board().copy();
        let side = state.current_turn();
        let depth = self.difficulty.search_depth();

        let mut search = Search::new(&mut self.tt);
        let result = search.best_move(&board, side, depth);

        self.nodes_searched = result.nodes_searched;
        self.last_score = result.score;

        result.best_move
    }
}
