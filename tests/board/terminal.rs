use grid_ttt::board::{Board, Line, Outcome};
use grid_ttt::league::League;
use grid_ttt::tile::{Piece, Tile};

use crate::board::board_test_main;
use crate::util::board_with_tiles;

/// Build a board from a picture like `"XO-/..."`, rows separated by `/`.
fn board_from_rows(rows: &str, league: League) -> Board {
    let tiles = rows
        .chars()
        .filter(|&c| c != '/')
        .enumerate()
        .map(|(index, c)| match c {
            '-' => Tile::Empty(index),
            c => Tile::Occupied(Piece::new(League::from_char(c).unwrap(), index)),
        })
        .collect();
    Board::from_tiles(league, tiles)
}

#[test]
fn top_row() {
    // X on 0, 1, 2 and O on 3, 4
    let board = board_with_tiles(3, &[0, 3, 1, 4, 2]);
    board_test_main(&board);

    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert_eq!(Some(Outcome::WonBy(League::First)), board.outcome());
    assert_eq!(Some(League::First), board.winner());
    assert!(board.is_line_owned(Line::Row(0), League::First));
}

#[test]
fn full_board_without_line() {
    let board = board_from_rows("XOX/OXO/OXO", League::Second);
    board_test_main(&board);

    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(Some(Outcome::Draw), board.outcome());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn line_on_last_move_is_a_win() {
    let board = board_with_tiles(3, &[1, 0, 3, 2, 6, 4, 7, 5, 8]);
    board_test_main(&board);

    assert!(board.is_stalemate());
    assert!(board.is_checkmate());
    assert_eq!(Some(Outcome::WonBy(League::First)), board.outcome());
}

#[test]
fn column() {
    let board = board_from_rows("-O--/XO--/X-O-/XO-X", League::First);
    assert!(!board.is_checkmate(), "only the league that just moved can have a line");

    let board = board_from_rows("-O--/XO--/X-O-/XO-X", League::Second);
    assert!(!board.is_checkmate());

    let board = board_from_rows("XO--/XO--/X-O-/XO-O", League::Second);
    board_test_main(&board);
    assert!(board.is_checkmate());
    assert!(board.is_line_owned(Line::Column(0), League::First));
}

#[test]
fn diagonals() {
    let board = board_from_rows("OX---/XO---/--O-X/---O-/X---O", League::First);
    board_test_main(&board);
    assert!(board.is_checkmate());
    assert!(board.is_line_owned(Line::Diagonal, League::Second));
    assert!(!board.is_line_owned(Line::AntiDiagonal, League::Second));

    let board = board_from_rows("O---X/O--X-/--X--/-X---/X-O-O", League::Second);
    board_test_main(&board);
    assert!(board.is_checkmate());
    assert!(board.is_line_owned(Line::AntiDiagonal, League::First));
    assert_eq!(Some(Outcome::WonBy(League::First)), board.outcome());
}

#[test]
fn almost_lines() {
    // every line is one tile short or interrupted
    let board = board_from_rows("XX-O/O-XX/XO--/-XO-", League::Second);
    board_test_main(&board);
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
    assert_eq!(None, board.outcome());
}
