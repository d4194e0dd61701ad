#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! An engine for generalized tic-tac-toe on an `N×N` grid, where a player wins by filling
//! a complete row, column or diagonal with their own pieces.
//!
//! Every [Board](crate::board::Board) is an immutable snapshot: playing a move builds a brand-new board,
//! so older boards can be kept around freely for undo/redo or search.
//!
//! # Features
//!
//! * The data model: [League](crate::league::League), [Piece](crate::tile::Piece),
//!     [Tile](crate::tile::Tile), [Move](crate::mv::Move) and [Player](crate::player::Player).
//! * Terminal-state detection through [Board::is_checkmate](crate::board::Board::is_checkmate)
//!     (a completed line) and [Board::is_stalemate](crate::board::Board::is_stalemate) (a full board).
//! * Game-playing algorithms:
//!     * [MiniMaxBot](crate::ai::minimax::MiniMaxBot),
//!         a depth-limited minimax search with alpha-beta pruning
//!         that falls back to a [heuristic](crate::ai::evaluator::evaluate) on grids larger than `3×3`.
//!     * [RandomBot](crate::ai::simple::RandomBot), which simply picks a random move.
//! * Move notation (`"X at (1, 2)"`) and replaying a move log, see [mv](crate::mv).
//! * A [Game](crate::game::Game) session with undo/redo and a JSON [GameRecord](crate::game::GameRecord).
//!
//! # Examples
//!
//! ## Play a couple of moves and ask the bot for a reply.
//!
//! ```
//! # use grid_ttt::board::Board;
//! # use grid_ttt::ai::minimax::best_move;
//! let board = Board::with_dimension(3);
//! let board = board.play_tile(4).unwrap();
//! let board = board.play_tile(0).unwrap();
//! println!("{}", board);
//!
//! let mv = best_move(&board, 4).unwrap();
//! println!("Picked {}", mv.notation(board.dimension()));
//! let board = board.play(mv).unwrap();
//! assert!(board.outcome().is_none());
//! ```

pub mod board;
pub mod error;
pub mod league;
pub mod mv;
pub mod player;
pub mod tile;

pub mod ai;

pub mod game;

pub mod util;
