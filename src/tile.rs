use std::fmt::{Display, Formatter};

use crate::league::League;

/// A piece placed by `league` on the cell `index`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Piece {
    pub league: League,
    pub index: usize,
}

/// A single cell of the board, addressed by its row-major index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tile {
    Empty(usize),
    Occupied(Piece),
}

impl Piece {
    pub fn new(league: League, index: usize) -> Self {
        Piece { league, index }
    }
}

impl Tile {
    pub fn new(index: usize, piece: Option<Piece>) -> Self {
        match piece {
            None => Tile::Empty(index),
            Some(piece) => {
                debug_assert_eq!(index, piece.index, "piece placed on the wrong tile");
                Tile::Occupied(piece)
            }
        }
    }

    pub fn index(&self) -> usize {
        match *self {
            Tile::Empty(index) => index,
            Tile::Occupied(piece) => piece.index,
        }
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    pub fn piece(&self) -> Option<Piece> {
        match *self {
            Tile::Empty(_) => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }

    /// The league occupying this tile, if any.
    pub fn league(&self) -> Option<League> {
        self.piece().map(|piece| piece.league)
    }

    pub fn to_char(&self) -> char {
        match self {
            Tile::Empty(_) => '-',
            Tile::Occupied(piece) => piece.league.to_char(),
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
