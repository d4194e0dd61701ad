//! Utilities for collecting game statistics and testing the engine and bots.
use std::collections::{HashMap, HashSet};

use internal_iterator::InternalIterator;

use crate::ai::Bot;
use crate::board::Board;
use crate::error::InternalInvariantError;
use crate::mv::Move;

/// The number of move sequences of length `depth` starting from `board`, finished boards are not expanded.
/// See <https://www.chessprogramming.org/Perft>.
pub fn perft(board: &Board, depth: u32) -> u64 {
    let mut map = HashMap::default();
    perft_recurse(&mut map, board.clone(), depth)
}

fn perft_recurse(map: &mut HashMap<(Board, u32), u64>, board: Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if board.is_done() {
        return 0;
    }

    // the same board can be reached at different remaining depths, so both are part of the key
    let key = (board, depth);
    if let Some(&p) = map.get(&key) {
        return p;
    }

    let board = &key.0;
    let mut p = 0;
    board.available_moves().for_each(|mv: Move| {
        p += perft_recurse(map, board.apply_move(mv.piece), depth - 1);
    });

    map.insert(key, p);
    p
}

/// Structure returned by [`average_game_stats`].
#[derive(Debug)]
pub struct GameStats {
    pub game_length: f32,
    pub available_moves: f32,
}

/// Return `GameStats` estimated from `n` games starting from `start` played by `bot` for both sides.
pub fn average_game_stats(start: &Board, mut bot: impl Bot, n: u64) -> Result<GameStats, InternalInvariantError> {
    let mut total_moves = 0;
    let mut total_positions = 0;

    for _ in 0..n {
        let mut board = start.clone();
        while !board.is_done() {
            total_moves += board.legal_moves().len();
            total_positions += 1;

            let mv = bot.select_move(&board)?;
            board = board.apply_move(mv.piece);
        }
    }

    Ok(GameStats {
        game_length: total_positions as f32 / n as f32,
        available_moves: total_moves as f32 / total_positions as f32,
    })
}

/// Generate the set of all boards reachable from the given board.
/// This quickly becomes infeasible for boards larger than `3×3`.
pub fn all_possible_boards(start: &Board, include_done: bool) -> Vec<Board> {
    let mut set = HashSet::new();
    let mut result = vec![];
    all_possible_boards_impl(start, include_done, &mut result, &mut set);
    result
}

fn all_possible_boards_impl(start: &Board, include_done: bool, result: &mut Vec<Board>, set: &mut HashSet<Board>) {
    if !include_done && start.is_done() {
        return;
    }
    if !set.insert(start.clone()) {
        return;
    }
    result.push(start.clone());
    if start.is_done() {
        return;
    }

    start
        .available_moves()
        .for_each(|mv: Move| all_possible_boards_impl(&start.apply_move(mv.piece), include_done, result, set))
}
