//! A bot that plays uniformly random legal moves, mostly useful as an opponent in tests.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::Bot;
use crate::board::Board;
use crate::error::InternalInvariantError;
use crate::mv::Move;

/// Bot that chooses moves randomly uniformly among the legal moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_move(&mut self, board: &Board) -> Result<Move, InternalInvariantError> {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(InternalInvariantError::NoLegalMoves)
    }
}
