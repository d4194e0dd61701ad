//! A game session: the current board together with its move log, the undo/redo history and the settings.
//!
//! The session can be saved as a [GameRecord], a small JSON document that stores the move log
//! instead of the board itself:
//!
//! ```json
//! {
//!   "moveLog": ["X at (1, 1)", "O at (0, 0)"],
//!   "gridOption": 3,
//!   "playerOption": { "crossAI": false, "noughtAI": true },
//!   "minimaxOption": 4
//! }
//! ```
use log::info;
use serde::{Deserialize, Serialize};

use crate::ai::minimax::best_move;
use crate::board::{Board, Outcome};
use crate::error::{GameError, InvalidOptionError, RestoreError};
use crate::league::League;
use crate::mv::Move;

/// The grid size, between `3` and `5`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridOption(u8);

/// The search depth used by bots, between `2` and `5`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MinimaxOption(u8);

/// Which sides are played by a bot.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PlayerOption {
    #[serde(rename = "crossAI")]
    pub cross_ai: bool,
    #[serde(rename = "noughtAI")]
    pub nought_ai: bool,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct GameSettings {
    pub grid: GridOption,
    pub players: PlayerOption,
    /// Bots only move when a depth is set.
    pub minimax: Option<MinimaxOption>,
}

/// The persisted form of a [Game].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub move_log: Vec<String>,
    pub grid_option: GridOption,
    pub player_option: PlayerOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimax_option: Option<MinimaxOption>,
}

#[derive(Debug, Clone)]
pub struct Game {
    settings: GameSettings,
    board: Board,
    move_log: Vec<String>,
    // each entry is a log slice removed by a single undo
    redo: Vec<Vec<String>>,
}

impl GridOption {
    pub const MIN: u8 = 3;
    pub const MAX: u8 = 5;

    pub fn new(dimension: u8) -> Result<Self, InvalidOptionError> {
        if (Self::MIN..=Self::MAX).contains(&dimension) {
            Ok(GridOption(dimension))
        } else {
            Err(InvalidOptionError {
                name: "grid",
                value: dimension,
            })
        }
    }

    pub fn dimension(self) -> usize {
        self.0 as usize
    }
}

impl Default for GridOption {
    fn default() -> Self {
        GridOption(Self::MIN)
    }
}

impl TryFrom<u8> for GridOption {
    type Error = InvalidOptionError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GridOption::new(value)
    }
}

impl From<GridOption> for u8 {
    fn from(grid: GridOption) -> Self {
        grid.0
    }
}

impl MinimaxOption {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 5;

    pub fn new(depth: u8) -> Result<Self, InvalidOptionError> {
        if (Self::MIN..=Self::MAX).contains(&depth) {
            Ok(MinimaxOption(depth))
        } else {
            Err(InvalidOptionError {
                name: "minimax depth",
                value: depth,
            })
        }
    }

    pub fn depth(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u8> for MinimaxOption {
    type Error = InvalidOptionError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MinimaxOption::new(value)
    }
}

impl From<MinimaxOption> for u8 {
    fn from(minimax: MinimaxOption) -> Self {
        minimax.0
    }
}

impl PlayerOption {
    pub fn is_ai(self, league: League) -> bool {
        match league {
            League::First => self.cross_ai,
            League::Second => self.nought_ai,
        }
    }
}

impl GameRecord {
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            grid: self.grid_option,
            players: self.player_option,
            minimax: self.minimax_option,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<GameRecord> {
        serde_json::from_str(json)
    }
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        Game {
            settings,
            board: Board::with_dimension(settings.grid.dimension()),
            move_log: vec![],
            redo: vec![],
        }
    }

    /// Rebuild a game by replaying the move log of `record`.
    pub fn from_record(record: &GameRecord) -> Result<Self, RestoreError> {
        let board = Board::restore_from_move_log(record.grid_option.dimension(), &record.move_log)?;
        info!("Restored game with {} moves", record.move_log.len());

        Ok(Game {
            settings: record.settings(),
            board,
            move_log: record.move_log.clone(),
            redo: vec![],
        })
    }

    pub fn record(&self) -> GameRecord {
        GameRecord {
            move_log: self.move_log.clone(),
            grid_option: self.settings.grid,
            player_option: self.settings.players,
            minimax_option: self.settings.minimax,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn set_players(&mut self, players: PlayerOption) {
        self.settings.players = players;
    }

    pub fn set_minimax(&mut self, minimax: Option<MinimaxOption>) {
        self.settings.minimax = minimax;
    }

    /// Start over on an empty board with the given grid, keeping the other settings.
    pub fn new_game(&mut self, grid: GridOption) {
        self.settings.grid = grid;
        self.board = Board::with_dimension(grid.dimension());
        self.move_log.clear();
        self.redo.clear();
    }

    /// The outcome, a completed line takes precedence over a full board.
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.outcome()
    }

    pub fn can_undo(&self) -> bool {
        !self.move_log.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Play the move of the current player on tile `index`.
    pub fn play_tile(&mut self, index: usize) -> Result<Move, GameError> {
        if self.outcome().is_some() {
            return Err(GameError::GameOver);
        }

        let mv = self.board.legal_move_to(index)?;
        self.push_move(mv);
        Ok(mv)
    }

    /// Whether the player to move is a bot that has a search depth configured.
    pub fn bot_to_move(&self) -> bool {
        self.outcome().is_none()
            && self.settings.minimax.is_some()
            && self.settings.players.is_ai(self.board.league())
    }

    /// Let the bot pick and play a move for the player to move.
    pub fn play_bot_move(&mut self) -> Result<Move, GameError> {
        if self.outcome().is_some() {
            return Err(GameError::GameOver);
        }
        let minimax = match self.settings.minimax {
            Some(minimax) if self.bot_to_move() => minimax,
            _ => return Err(GameError::NotBotTurn),
        };

        let mv = best_move(&self.board, minimax.depth())?;
        self.push_move(mv);
        Ok(mv)
    }

    fn push_move(&mut self, mv: Move) {
        let notation = mv.notation(self.board.dimension()).to_string();
        info!("Playing {}", notation);

        self.board = self.board.apply_move(mv.piece);
        self.move_log.push(notation);
        self.redo.clear();

        match self.board.outcome() {
            Some(Outcome::WonBy(league)) => info!("{} has won the game", league),
            Some(Outcome::Draw) => info!("It's a tie"),
            None => {}
        }
    }

    /// Take back the last move. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> Result<bool, GameError> {
        let keep = self.move_log.len().saturating_sub(1);
        self.truncate_log(keep)
    }

    /// Go back to the board right after move `index` of the log, all later moves become a single redo step.
    /// Returns `false` if `index` is already the last move or lies beyond the log.
    pub fn restore_to(&mut self, index: usize) -> Result<bool, GameError> {
        self.truncate_log(index.saturating_add(1))
    }

    fn truncate_log(&mut self, keep: usize) -> Result<bool, GameError> {
        if keep >= self.move_log.len() {
            return Ok(false);
        }

        let removed = self.move_log.split_off(keep);
        info!("Taking back {:?}", removed);
        self.board = Board::restore_from_move_log(self.board.dimension(), &self.move_log)?;
        self.redo.push(removed);
        Ok(true)
    }

    /// Replay the moves removed by the most recent undo or [Game::restore_to]. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> Result<bool, GameError> {
        let removed = match self.redo.pop() {
            None => return Ok(false),
            Some(removed) => removed,
        };

        info!("Redoing {:?}", removed);
        self.board = Board::restore_from_removed_move_log(self.board.dimension(), &removed, &self.board)?;
        self.move_log.extend(removed);
        Ok(true)
    }
}
