use crate::league::League;
use crate::mv::Move;
use crate::tile::Tile;

/// One side of a board, together with the moves it could play on that board.
///
/// Players are rebuilt with every board, the legal moves are computed eagerly at construction.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Player {
    league: League,
    opponent_league: League,
    legal_moves: Vec<Move>,
}

impl Player {
    /// Build the player for `league`, with one legal move per empty tile in ascending index order.
    pub fn new(league: League, tiles: &[Tile]) -> Self {
        let legal_moves = tiles
            .iter()
            .filter(|tile| !tile.is_occupied())
            .map(|tile| Move::new(league, tile.index()))
            .collect();

        Player {
            league,
            opponent_league: league.other(),
            legal_moves,
        }
    }

    pub fn first(tiles: &[Tile]) -> Self {
        Player::new(League::First, tiles)
    }

    pub fn second(tiles: &[Tile]) -> Self {
        Player::new(League::Second, tiles)
    }

    pub fn league(&self) -> League {
        self.league
    }

    pub fn opponent_league(&self) -> League {
        self.opponent_league
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    /// The legal move that places a piece on `index`, if there is one.
    pub fn move_to(&self, index: usize) -> Option<Move> {
        // legal moves are sorted by index
        self.legal_moves
            .binary_search_by_key(&index, |mv| mv.index())
            .ok()
            .map(|i| self.legal_moves[i])
    }
}
