use grid_ttt::board::{Board, Outcome};
use grid_ttt::error::IllegalMoveError;
use grid_ttt::mv::Move;
use grid_ttt::tile::Tile;

mod restore;
mod terminal;

/// Check the invariants that every board should satisfy, and play every legal move once.
pub fn board_test_main(board: &Board) {
    println!("Currently testing board\n{:?}\n{}", board, board);

    test_players_consistent(board);
    test_outcome_consistent(board);

    if !board.is_done() {
        test_legal_moves_match(board);
        test_illegal_moves_rejected(board);
        test_play_each(board);
    }
}

fn test_players_consistent(board: &Board) {
    let n = board.number_of_tiles();
    assert_eq!(board.dimension() * board.dimension(), n);
    assert_eq!(n, board.tiles().len());
    assert_eq!(n, board.rows().count() * board.dimension());

    for (i, tile) in board.tiles().iter().enumerate() {
        assert_eq!(i, tile.index(), "tile at {} reports a different index", i);
    }

    assert_eq!(board.league(), board.current_player().league());
    assert_eq!(board.league().other(), board.current_player().opponent_league());
    assert_eq!(grid_ttt::league::League::First, board.first_player().league());
    assert_eq!(grid_ttt::league::League::Second, board.second_player().league());

    // both players see the same empty tiles
    let first: Vec<usize> = board.first_player().legal_moves().iter().map(|mv| mv.index()).collect();
    let second: Vec<usize> = board.second_player().legal_moves().iter().map(|mv| mv.index()).collect();
    assert_eq!(first, second);
}

fn test_outcome_consistent(board: &Board) {
    match board.outcome() {
        None => {
            assert!(!board.is_checkmate());
            assert!(!board.is_stalemate());
            assert!(!board.legal_moves().is_empty());
        }
        Some(Outcome::WonBy(league)) => {
            assert!(board.is_checkmate());
            assert_eq!(board.current_player().opponent_league(), league);
            assert_eq!(Some(league), board.winner());
        }
        Some(Outcome::Draw) => {
            assert!(!board.is_checkmate());
            assert!(board.is_stalemate());
            assert!(board.legal_moves().is_empty());
            assert_eq!(None, board.winner());
        }
    }
}

fn test_legal_moves_match(board: &Board) {
    let expected: Vec<Move> = board
        .tiles()
        .iter()
        .filter(|tile| !tile.is_occupied())
        .map(|tile| Move::new(board.league(), tile.index()))
        .collect();
    assert_eq!(expected, board.legal_moves());

    assert!(
        board.legal_moves().windows(2).all(|w| w[0].index() < w[1].index()),
        "legal moves must be in ascending index order"
    );
}

fn test_illegal_moves_rejected(board: &Board) {
    let n = board.number_of_tiles();

    for tile in board.tiles() {
        if let Tile::Occupied(piece) = tile {
            assert_eq!(
                Err(IllegalMoveError::Occupied { index: piece.index }),
                board.play_tile(piece.index)
            );
        }
    }

    assert_eq!(
        Err(IllegalMoveError::OutOfRange {
            index: n,
            number_of_tiles: n
        }),
        board.play_tile(n)
    );

    let mv = board.legal_moves()[0];
    let wrong = Move::new(board.league().other(), mv.index());
    assert_eq!(
        Err(IllegalMoveError::WrongLeague {
            index: mv.index(),
            expected: board.league()
        }),
        board.play(wrong)
    );
}

fn test_play_each(board: &Board) {
    for &mv in board.legal_moves() {
        let child = board.play(mv).unwrap();
        assert_eq!(child, board.play_tile(mv.index()).unwrap());
        assert_eq!(child, board.apply_move(mv.piece));

        assert_eq!(board.league().other(), child.league());
        assert_eq!(board.legal_moves().len() - 1, child.legal_moves().len());

        for (before, after) in board.tiles().iter().zip(child.tiles()) {
            if before.index() == mv.index() {
                assert_eq!(&Tile::Occupied(mv.piece), after);
            } else {
                assert_eq!(before, after);
            }
        }
    }
}
