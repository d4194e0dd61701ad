use grid_ttt::board::Board;
use grid_ttt::error::{IllegalMoveError, RestoreError};
use grid_ttt::league::League;
use grid_ttt::mv::{parse_move_notation, Move};
use grid_ttt::util::tiny::consistent_rng;

use crate::util::{board_with_tiles, random_game};

#[test]
fn restore_simple() {
    let log = ["X at (1, 1)", "O at (0, 0)", "X at (2, 0)"];
    let board = Board::restore_from_move_log(3, &log).unwrap();

    assert_eq!(board_with_tiles(3, &[4, 0, 2]), board);
    assert_eq!(League::Second, board.league());
}

#[test]
fn restore_empty_log() {
    let log: [&str; 0] = [];
    assert_eq!(Board::with_dimension(4), Board::restore_from_move_log(4, &log).unwrap());
}

#[test]
fn restore_matches_direct_play() {
    let mut rng = consistent_rng();

    for dimension in 3..=5 {
        for _ in 0..20 {
            let (board, moves) = random_game(&Board::with_dimension(dimension), &mut rng);
            let log: Vec<String> = moves.iter().map(|mv| mv.notation(dimension).to_string()).collect();

            let restored = Board::restore_from_move_log(dimension, &log).unwrap();
            assert_eq!(board, restored);
            assert_eq!(board.outcome(), restored.outcome());

            // replaying the tail on top of a prefix gives the same board
            let split = log.len() / 2;
            let prefix = Board::restore_from_move_log(dimension, &log[..split]).unwrap();
            let full = Board::restore_from_removed_move_log(dimension, &log[split..], &prefix).unwrap();
            assert_eq!(board, full);
        }
    }
}

#[test]
fn notation_round_trip() {
    for dimension in 3..=5 {
        let board = Board::with_dimension(dimension);
        for league in League::BOTH {
            for index in 0..board.number_of_tiles() {
                let mv = Move::new(league, index);
                let notation = mv.notation(dimension).to_string();
                assert_eq!(
                    Ok((index % dimension, index / dimension)),
                    parse_move_notation(&notation),
                    "notation {:?}",
                    notation
                );
            }
        }
    }
}

#[test]
fn side_letter_does_not_choose_the_mover() {
    let board = Board::restore_from_move_log(3, &["O at (0, 0)"]).unwrap();
    assert_eq!(Some(League::First), board.tile(0).unwrap().league());
}

#[test]
fn malformed_notation() {
    let result = Board::restore_from_move_log(3, &["X at (1, 1)", "X at (1 1)"]);
    match result {
        Err(RestoreError::MalformedNotation(e)) => assert_eq!("X at (1 1)", e.notation),
        other => panic!("Expected malformed notation error, got {:?}", other),
    }
}

#[test]
fn occupied_tile_in_log() {
    let result = Board::restore_from_move_log(3, &["X at (1, 1)", "O at (1, 1)"]);
    assert_eq!(
        Err(RestoreError::IllegalMove {
            position: 1,
            error: IllegalMoveError::Occupied { index: 4 }
        }),
        result
    );
}

#[test]
fn coordinates_out_of_range() {
    let result = Board::restore_from_move_log(3, &["X at (3, 0)"]);
    assert_eq!(
        Err(RestoreError::IllegalMove {
            position: 0,
            error: IllegalMoveError::OutOfRange {
                index: 3,
                number_of_tiles: 9
            }
        }),
        result
    );

    let result = Board::restore_from_move_log(4, &["X at (0, 0)", "O at (1, 4)"]);
    assert_eq!(
        Err(RestoreError::IllegalMove {
            position: 1,
            error: IllegalMoveError::OutOfRange {
                index: 17,
                number_of_tiles: 16
            }
        }),
        result
    );
}
