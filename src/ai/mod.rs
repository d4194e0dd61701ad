use std::fmt::Debug;

use crate::board::Board;
use crate::error::InternalInvariantError;
use crate::mv::Move;

pub mod evaluator;
pub mod minimax;
pub mod simple;

pub trait Bot: Debug {
    /// Pick a move to play.
    /// Returns [InternalInvariantError::NoLegalMoves] if the current player has no moves left.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &Board) -> Result<Move, InternalInvariantError>;
}

impl<F: FnMut(&Board) -> Result<Move, InternalInvariantError> + Debug> Bot for F {
    fn select_move(&mut self, board: &Board) -> Result<Move, InternalInvariantError> {
        self(board)
    }
}
