//! The error types returned by the engine.
//!
//! Violations of the board invariants themselves (a tile count that is not a perfect square,
//! placing a piece on an occupied tile through [Board::apply_move](crate::board::Board::apply_move))
//! are not represented here, those are bugs in the caller and panic instead.
use std::error::Error;
use std::fmt::{Display, Formatter};

use nom::error::ErrorKind;

use crate::league::League;

/// A move was requested that is not one of the legal moves of the current player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum IllegalMoveError {
    /// The tile already holds a piece.
    Occupied { index: usize },
    /// The index does not address a tile on the board.
    OutOfRange { index: usize, number_of_tiles: usize },
    /// The tile is free, but the move was made for the player that is not to move.
    WrongLeague { index: usize, expected: League },
}

/// A move notation string did not match `<X|O> at (<col>, <row>)`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MalformedNotationError {
    pub notation: String,
    pub kind: ErrorKind,
}

/// An engine invariant was broken by the caller, for example by searching a board without any legal moves.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InternalInvariantError {
    NoLegalMoves,
}

/// A game setting was outside of its allowed range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct InvalidOptionError {
    pub name: &'static str,
    pub value: u8,
}

/// Failure of an operation on a [Game](crate::game::Game).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GameError {
    /// The game already has an outcome.
    GameOver,
    /// A bot move was requested while a human is to move, or no search depth is configured.
    NotBotTurn,
    IllegalMove(IllegalMoveError),
    Restore(RestoreError),
    Search(InternalInvariantError),
}

/// Failure while replaying a move log.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RestoreError {
    MalformedNotation(MalformedNotationError),
    IllegalMove { position: usize, error: IllegalMoveError },
}

impl Display for IllegalMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            IllegalMoveError::Occupied { index } => write!(f, "tile {} is already occupied", index),
            IllegalMoveError::OutOfRange { index, number_of_tiles } => {
                write!(f, "tile {} is out of range for a board with {} tiles", index, number_of_tiles)
            }
            IllegalMoveError::WrongLeague { index, expected } => {
                write!(f, "move on tile {} was made out of turn, {} is to move", index, expected)
            }
        }
    }
}

impl Display for MalformedNotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "malformed move notation {:?}, expected `<X|O> at (<col>, <row>)` ({:?})",
            self.notation, self.kind
        )
    }
}

impl Display for InternalInvariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InternalInvariantError::NoLegalMoves => write!(f, "cannot search a board without legal moves"),
        }
    }
}

impl Display for RestoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RestoreError::MalformedNotation(e) => write!(f, "{}", e),
            RestoreError::IllegalMove { position, error } => {
                write!(f, "move {} of the log is illegal: {}", position, error)
            }
        }
    }
}

impl Display for InvalidOptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value {} for {}", self.value, self.name)
    }
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "the game is already over"),
            GameError::NotBotTurn => write!(f, "the player to move is not controlled by a bot"),
            GameError::IllegalMove(e) => write!(f, "{}", e),
            GameError::Restore(e) => write!(f, "{}", e),
            GameError::Search(e) => write!(f, "{}", e),
        }
    }
}

impl Error for IllegalMoveError {}

impl Error for MalformedNotationError {}

impl Error for InternalInvariantError {}

impl Error for RestoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RestoreError::MalformedNotation(e) => Some(e),
            RestoreError::IllegalMove { error, .. } => Some(error),
        }
    }
}

impl Error for InvalidOptionError {}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GameError::GameOver | GameError::NotBotTurn => None,
            GameError::IllegalMove(e) => Some(e),
            GameError::Restore(e) => Some(e),
            GameError::Search(e) => Some(e),
        }
    }
}

impl From<IllegalMoveError> for GameError {
    fn from(e: IllegalMoveError) -> Self {
        GameError::IllegalMove(e)
    }
}

impl From<RestoreError> for GameError {
    fn from(e: RestoreError) -> Self {
        GameError::Restore(e)
    }
}

impl From<InternalInvariantError> for GameError {
    fn from(e: InternalInvariantError) -> Self {
        GameError::Search(e)
    }
}

impl From<MalformedNotationError> for RestoreError {
    fn from(e: MalformedNotationError) -> Self {
        RestoreError::MalformedNotation(e)
    }
}
