//! Moves and their notation.
//!
//! A move log is stored as a list of notations like `"X at (2, 0)"`, where the first number is the
//! column and the second one the row of the target tile. The notation depends on the board dimension,
//! so a move is only converted into one through [Move::notation].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::Finish;

use crate::error::MalformedNotationError;
use crate::league::League;
use crate::tile::Piece;

/// An instruction to place `piece`. Two moves are equal iff they have the same index and league.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Move {
    pub piece: Piece,
}

/// Display adapter for the notation of a move on a board with the given dimension.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MoveNotation {
    mv: Move,
    dimension: usize,
}

/// The parsed contents of a move notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NotationCoord {
    pub league: League,
    pub col: usize,
    pub row: usize,
}

impl Move {
    pub fn new(league: League, index: usize) -> Self {
        Move {
            piece: Piece::new(league, index),
        }
    }

    pub fn league(self) -> League {
        self.piece.league
    }

    pub fn index(self) -> usize {
        self.piece.index
    }

    pub fn col(self, dimension: usize) -> usize {
        self.piece.index % dimension
    }

    pub fn row(self, dimension: usize) -> usize {
        self.piece.index / dimension
    }

    pub fn notation(self, dimension: usize) -> MoveNotation {
        assert!(dimension > 0);
        MoveNotation { mv: self, dimension }
    }
}

impl NotationCoord {
    /// The row-major tile index this notation points to.
    pub fn index(self, dimension: usize) -> usize {
        self.row * dimension + self.col
    }
}

/// Parse a notation like `"O at (1, 2)"` into its `(col, row)` pair.
pub fn parse_move_notation(notation: &str) -> Result<(usize, usize), MalformedNotationError> {
    let coord: NotationCoord = notation.parse()?;
    Ok((coord.col, coord.row))
}

mod parse {
    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{char, digit1};
    use nom::combinator::{eof, map_res, value};
    use nom::sequence::{terminated, tuple};
    use nom::IResult;

    use super::*;

    fn league(input: &str) -> IResult<&str, League> {
        alt((value(League::First, char('X')), value(League::Second, char('O'))))(input)
    }

    fn number(input: &str) -> IResult<&str, usize> {
        map_res(digit1, |s: &str| s.parse::<usize>())(input)
    }

    pub(super) fn notation(input: &str) -> IResult<&str, NotationCoord> {
        let (left, (league, _, col, _, row, _)) = terminated(
            tuple((league, tag(" at ("), number, tag(", "), number, char(')'))),
            eof,
        )(input)?;
        Ok((left, NotationCoord { league, col, row }))
    }
}

impl FromStr for NotationCoord {
    type Err = MalformedNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse::notation(s).finish() {
            Ok((_, coord)) => Ok(coord),
            Err(e) => Err(MalformedNotationError {
                notation: s.to_string(),
                kind: e.code,
            }),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.piece.league, self.piece.index)
    }
}

impl Display for MoveNotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at ({}, {})",
            self.mv.league(),
            self.mv.col(self.dimension),
            self.mv.row(self.dimension)
        )
    }
}
