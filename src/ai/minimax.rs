//! Depth-limited minimax with alpha-beta pruning.
//!
//! [League::First](crate::league::League::First) is the maximizing side and [League::Second](crate::league::League::Second) the minimizing one.
//! Finished boards are scored relative to the remaining depth: a completed line is worth
//! `WIN_SCORE - depth` for the first league and `depth - WIN_SCORE` for the second league,
//! a draw is worth `-depth` or `depth` depending on who is to move.
//! Boards up to `3×3` are always searched until the game ends, larger boards are cut off at the
//! depth limit and scored by [evaluate].
use std::fmt::{Debug, Formatter};
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;
use log::debug;

use crate::ai::evaluator::evaluate;
use crate::ai::Bot;
use crate::board::Board;
use crate::error::InternalInvariantError;
use crate::mv::Move;

/// The base score of a completed line.
pub const WIN_SCORE: i32 = 10;

/// The largest dimension that is always searched until the end of the game.
pub const EXHAUSTIVE_DIMENSION: usize = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MinimaxResult {
    /// The move that was picked.
    pub best_move: Move,

    /// The value of `best_move`, positive values favour [League::First](crate::league::League::First).
    pub value: i32,

    /// The number of boards visited below the root.
    pub nodes: u64,
}

/// Pick the best move for the current player of `board`, searching `depth` moves deep.
/// Panics if `depth` is zero.
///
/// Scores only stay ordered (win > draw > loss) while `depth` is small compared to [WIN_SCORE].
/// With a large depth a quick loss (`depth - WIN_SCORE` after few plies) can outscore a late draw
/// (`-depth`), on an empty `3×3` board a depth of `9` already loses as the first league.
/// Depths between `2` and `5`, as accepted by [MinimaxOption](crate::game::MinimaxOption), are safe.
pub fn best_move(board: &Board, depth: u32) -> Result<Move, InternalInvariantError> {
    minimax(board, depth).map(|result| result.best_move)
}

/// Search `board` to the given depth and return the best move together with its value.
///
/// A move that completes a line is returned immediately. Otherwise ties are broken in favour of
/// the move with the lowest tile index.
/// Panics if `depth` is zero.
pub fn minimax(board: &Board, depth: u32) -> Result<MinimaxResult, InternalInvariantError> {
    assert!(depth > 0, "requires depth>0 to find the best move");
    let depth = i32::try_from(depth).unwrap_or(i32::MAX);

    let maximizing = board.current_player().league().is_first();
    let mut search = Search {
        dimension: board.dimension(),
        original_depth: depth,
        nodes: 0,
    };

    let mut highest = i32::MIN;
    let mut lowest = i32::MAX;
    let mut best: Option<(Move, i32)> = None;

    for &mv in board.legal_moves() {
        let child = board.apply_move(mv.piece);
        let value = if maximizing {
            search.min(&child, depth - 1, highest, lowest)
        } else {
            search.max(&child, depth - 1, highest, lowest)
        };

        if child.is_checkmate() {
            debug!("Move {} completes a line", mv.notation(board.dimension()));
            return Ok(MinimaxResult {
                best_move: mv,
                value,
                nodes: search.nodes,
            });
        }

        debug!("Move {} has value {}", mv.notation(board.dimension()), value);

        if maximizing && value > highest {
            highest = value;
            best = Some((mv, value));
        } else if !maximizing && value < lowest {
            lowest = value;
            best = Some((mv, value));
        }
    }

    let (best_move, value) = best.ok_or(InternalInvariantError::NoLegalMoves)?;
    debug!(
        "Picked {} with value {} after {} nodes",
        best_move.notation(board.dimension()),
        value,
        search.nodes
    );

    Ok(MinimaxResult {
        best_move,
        value,
        nodes: search.nodes,
    })
}

struct Search {
    dimension: usize,
    original_depth: i32,
    nodes: u64,
}

impl Search {
    fn is_cutoff(&self, depth: i32) -> bool {
        self.dimension > EXHAUSTIVE_DIMENSION && depth == 0
    }

    /// Value of `board` where [League::Second](crate::league::League::Second) is to move.
    /// Returns `alpha` as soon as the value is known to be at most `alpha`.
    fn min(&mut self, board: &Board, depth: i32, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if board.is_checkmate() {
            return WIN_SCORE - depth;
        }
        if board.is_stalemate() {
            return -depth;
        }
        if self.is_cutoff(depth) {
            return evaluate(board, self.original_depth - depth);
        }

        let mut lowest = beta;
        let flow = board.available_moves().try_for_each(|mv: Move| {
            let child = board.apply_move(mv.piece);
            lowest = lowest.min(self.max(&child, depth - 1, alpha, lowest));

            if lowest <= alpha {
                ControlFlow::Break(alpha)
            } else {
                ControlFlow::Continue(())
            }
        });

        match flow {
            ControlFlow::Break(value) => value,
            ControlFlow::Continue(()) => lowest,
        }
    }

    /// Value of `board` where [League::First](crate::league::League::First) is to move.
    /// Returns `beta` as soon as the value is known to be at least `beta`.
    fn max(&mut self, board: &Board, depth: i32, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if board.is_checkmate() {
            return depth - WIN_SCORE;
        }
        if board.is_stalemate() {
            return depth;
        }
        if self.is_cutoff(depth) {
            return evaluate(board, self.original_depth - depth);
        }

        let mut highest = alpha;
        let flow = board.available_moves().try_for_each(|mv: Move| {
            let child = board.apply_move(mv.piece);
            highest = highest.max(self.min(&child, depth - 1, highest, beta));

            if highest >= beta {
                ControlFlow::Break(beta)
            } else {
                ControlFlow::Continue(())
            }
        });

        match flow {
            ControlFlow::Break(value) => value,
            ControlFlow::Continue(()) => highest,
        }
    }
}

/// Bot that plays the move picked by [best_move] at a fixed depth.
pub struct MiniMaxBot {
    depth: u32,
}

impl Debug for MiniMaxBot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MiniMaxBot {{ depth: {} }}", self.depth)
    }
}

impl MiniMaxBot {
    pub fn new(depth: u32) -> Self {
        assert!(depth > 0, "requires depth>0 to find the best move");
        MiniMaxBot { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Bot for MiniMaxBot {
    fn select_move(&mut self, board: &Board) -> Result<Move, InternalInvariantError> {
        best_move(board, self.depth)
    }
}
