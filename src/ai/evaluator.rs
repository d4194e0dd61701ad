//! Heuristic used when the search is cut off before reaching a finished board.
use crate::board::{Board, Line};
use crate::league::League;

/// The score of a single tile occupied by the point-of-view league, the opponent gets the negation.
pub const TILE_SCORE: i32 = 100;

/// Evaluate `board` from the POV of the player to move.
///
/// Every row, column and diagonal contributes `+TILE_SCORE` for each tile held by that player
/// and `-TILE_SCORE` for each opponent tile, mixed lines included. The sum is scaled by `depth_diff`
/// unless that is zero.
pub fn evaluate(board: &Board, depth_diff: i32) -> i32 {
    let pov = board.current_player().league();
    let score: i32 = Line::all(board.dimension())
        .map(|line| line_score(board, line, pov))
        .sum();

    if depth_diff == 0 {
        score
    } else {
        score * depth_diff
    }
}

fn line_score(board: &Board, line: Line, pov: League) -> i32 {
    line.cells(board.dimension())
        .map(|index| match board.tiles()[index].league() {
            None => 0,
            Some(league) => league.sign::<i32>(pov) * TILE_SCORE,
        })
        .sum()
}
