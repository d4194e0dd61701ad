use std::fmt::{Display, Formatter};
use std::iter::Copied;
use std::slice::Iter;

use internal_iterator::{Internal, IteratorExt};
use log::trace;

use crate::error::{IllegalMoveError, RestoreError};
use crate::league::League;
use crate::mv::{Move, NotationCoord};
use crate::player::Player;
use crate::tile::{Piece, Tile};

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(League),
    Draw,
}

/// One of the `2 * dimension + 2` lines that win the game when completely filled by a single league.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// From the top left to the bottom right corner.
    Diagonal,
    /// From the top right to the bottom left corner.
    AntiDiagonal,
}

/// An immutable snapshot of an `N×N` game.
///
/// Tiles are stored in row-major order, so tile `row * dimension + col` is at the given coordinates.
/// Both players and their legal moves are computed when the board is built,
/// every move then produces a new board through [Board::apply_move].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    tiles: Vec<Tile>,
    league: League,
    first_player: Player,
    second_player: Player,
    dimension: usize,
}

impl Line {
    /// All lines for the given dimension: the rows, the columns and then both diagonals.
    pub fn all(dimension: usize) -> impl Iterator<Item = Line> {
        (0..dimension)
            .map(Line::Row)
            .chain((0..dimension).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The tile indices on this line, ordered by row (or by column for rows).
    pub fn cells(self, dimension: usize) -> impl Iterator<Item = usize> {
        (0..dimension).map(move |i| match self {
            Line::Row(row) => row * dimension + i,
            Line::Column(col) => i * dimension + col,
            Line::Diagonal => i * dimension + i,
            Line::AntiDiagonal => i * dimension + (dimension - 1 - i),
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::with_dimension(3)
    }
}

impl Board {
    /// An empty board with `number_of_tiles` tiles where [League::First] is to move.
    /// Panics if `number_of_tiles` is not a positive perfect square.
    pub fn standard(number_of_tiles: usize) -> Board {
        let tiles = (0..number_of_tiles).map(Tile::Empty).collect();
        Board::from_tiles(League::First, tiles)
    }

    /// An empty `dimension×dimension` board.
    pub fn with_dimension(dimension: usize) -> Board {
        Board::standard(dimension * dimension)
    }

    /// Build a board from its tiles, with `league` to move next.
    /// Panics if the number of tiles is not a positive perfect square.
    pub fn from_tiles(league: League, tiles: Vec<Tile>) -> Board {
        let number_of_tiles = tiles.len();
        let dimension = exact_sqrt(number_of_tiles);
        assert!(
            number_of_tiles > 0 && dimension * dimension == number_of_tiles,
            "Board must have a positive square number of tiles, got {}",
            number_of_tiles
        );
        debug_assert!(
            tiles.iter().enumerate().all(|(i, tile)| tile.index() == i),
            "Tiles must be ordered by index"
        );

        let first_player = Player::first(&tiles);
        let second_player = Player::second(&tiles);

        Board {
            tiles,
            league,
            first_player,
            second_player,
            dimension,
        }
    }

    /// Replay a move log on an empty `dimension×dimension` board.
    pub fn restore_from_move_log<S: AsRef<str>>(dimension: usize, move_log: &[S]) -> Result<Board, RestoreError> {
        Board::restore_from_removed_move_log(dimension, move_log, &Board::with_dimension(dimension))
    }

    /// Replay a move log on top of `base`, used to redo previously undone moves.
    ///
    /// The side letter in each notation is checked by the parser, but the piece is always placed
    /// for the player that is to move on the board at that point.
    pub fn restore_from_removed_move_log<S: AsRef<str>>(
        dimension: usize,
        move_log: &[S],
        base: &Board,
    ) -> Result<Board, RestoreError> {
        assert_eq!(
            dimension,
            base.dimension(),
            "Restoring a move log onto a board with a different dimension"
        );

        move_log
            .iter()
            .enumerate()
            .try_fold(base.clone(), |board, (position, notation)| {
                let notation = notation.as_ref();
                let coord: NotationCoord = notation.parse()?;
                trace!("Replaying {:?} as move {}", notation, position);

                if coord.col >= dimension || coord.row >= dimension {
                    let error = IllegalMoveError::OutOfRange {
                        index: coord.row.saturating_mul(dimension).saturating_add(coord.col),
                        number_of_tiles: board.number_of_tiles(),
                    };
                    return Err(RestoreError::IllegalMove { position, error });
                }

                board
                    .play_tile(coord.index(dimension))
                    .map_err(|error| RestoreError::IllegalMove { position, error })
            })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// The tiles split into rows of length `dimension`.
    pub fn rows(&self) -> std::slice::Chunks<'_, Tile> {
        self.tiles.chunks(self.dimension)
    }

    /// The league that is to move next.
    pub fn league(&self) -> League {
        self.league
    }

    pub fn first_player(&self) -> &Player {
        &self.first_player
    }

    pub fn second_player(&self) -> &Player {
        &self.second_player
    }

    pub fn player(&self, league: League) -> &Player {
        match league {
            League::First => &self.first_player,
            League::Second => &self.second_player,
        }
    }

    /// The player that is to move next. On a finished board this is the player that did not make the last move.
    pub fn current_player(&self) -> &Player {
        self.player(self.league)
    }

    pub fn number_of_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The legal moves of the current player, in ascending tile index order.
    pub fn legal_moves(&self) -> &[Move] {
        self.current_player().legal_moves()
    }

    /// Internal iterator over [Board::legal_moves].
    pub fn available_moves(&self) -> Internal<Copied<Iter<'_, Move>>> {
        self.legal_moves().iter().copied().into_internal()
    }

    /// Place `piece` and flip the turn, without checking whether the move is legal.
    /// The piece must target an empty tile, moves should be taken from [Board::legal_moves].
    pub fn apply_move(&self, piece: Piece) -> Board {
        debug_assert!(
            !self.tiles[piece.index].is_occupied(),
            "Tile {} is already occupied on\n{}",
            piece.index,
            self
        );

        let mut tiles = self.tiles.clone();
        tiles[piece.index] = Tile::Occupied(piece);
        Board::from_tiles(self.current_player().opponent_league(), tiles)
    }

    /// The legal move of the current player that places a piece on `index`.
    pub fn legal_move_to(&self, index: usize) -> Result<Move, IllegalMoveError> {
        self.current_player().move_to(index).ok_or_else(|| {
            if index >= self.number_of_tiles() {
                IllegalMoveError::OutOfRange {
                    index,
                    number_of_tiles: self.number_of_tiles(),
                }
            } else {
                IllegalMoveError::Occupied { index }
            }
        })
    }

    /// Play `mv`, which must be one of the legal moves of the current player.
    pub fn play(&self, mv: Move) -> Result<Board, IllegalMoveError> {
        let legal = self.legal_move_to(mv.index())?;
        if legal != mv {
            return Err(IllegalMoveError::WrongLeague {
                index: mv.index(),
                expected: self.league,
            });
        }
        Ok(self.apply_move(mv.piece))
    }

    /// Play the current player's move on tile `index`.
    pub fn play_tile(&self, index: usize) -> Result<Board, IllegalMoveError> {
        let mv = self.legal_move_to(index)?;
        Ok(self.apply_move(mv.piece))
    }

    /// Whether `line` is completely filled by `league`.
    pub fn is_line_owned(&self, line: Line, league: League) -> bool {
        line.cells(self.dimension)
            .all(|index| self.tiles[index].league() == Some(league))
    }

    /// Whether the league that made the last move has completed a line.
    pub fn is_checkmate(&self) -> bool {
        let league = self.current_player().opponent_league();
        Line::all(self.dimension).any(|line| self.is_line_owned(line, league))
    }

    /// Whether every tile is occupied. A full board can also be a checkmate, check that first.
    pub fn is_stalemate(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_occupied())
    }

    /// The outcome of this board, `None` if the game is still going.
    /// A line completed by the final move is a win, not a draw.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_checkmate() {
            Some(Outcome::WonBy(self.current_player().opponent_league()))
        } else if self.is_stalemate() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn winner(&self) -> Option<League> {
        match self.outcome() {
            Some(Outcome::WonBy(league)) => Some(league),
            _ => None,
        }
    }
}

fn exact_sqrt(n: usize) -> usize {
    let root = (n as f64).sqrt().round() as usize;
    (root.saturating_sub(1)..=root + 1)
        .find(|&r| r * r == n)
        .unwrap_or(root)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let border = "-".repeat(self.dimension);

        writeln!(f, "+{}+", border)?;
        for (y, row) in self.rows().enumerate() {
            write!(f, "|")?;
            for tile in row {
                write!(f, "{}", tile)?;
            }
            write!(f, "|")?;

            if y == self.dimension / 2 {
                write!(f, "   {}", self.league)?;
            }

            writeln!(f)?;
        }
        writeln!(f, "+{}+", border)?;

        Ok(())
    }
}
