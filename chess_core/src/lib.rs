//! Chess rules and state: board representation, move generation, legality,
//! special moves, and terminal-status detection.
//!
//! This crate knows nothing about choosing a move -- that's
//! [`chess_engine`](https://docs.rs/chess_engine), which is built on top of
//! it.

pub mod board;
pub mod game;
pub mod move_gen;
pub mod notation;
pub mod perft;
pub mod test_utils;

pub use board::{Board, Castling, Color, Move, MoveKind, Piece, PieceType, Square, ZobristHash};
pub use game::{GameState, Status};
pub use move_gen::{legal_moves, legal_moves_from, legal_moves_raw, pseudo_legal_moves_from, MoveVec};
pub use notation::to_algebraic;
