use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;
use rand::Rng;

use grid_ttt::board::Board;
use grid_ttt::mv::Move;

pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(
    expected: &[T],
    print: bool,
    mut sampler: impl FnMut() -> Option<T>,
) {
    // expected is not a HashSet so we can print things in a reasonable order
    assert!(
        expected.iter().all_unique(),
        "Got duplicate value in expected: {:?}",
        expected
    );

    // if there are no expected values, ensure the sampler doesn't return any
    if expected.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, sampler());
        }
        return;
    }

    let samples_per_value = 1000;
    let total_samples = samples_per_value * expected.len();

    if print {
        println!(
            "Test sampler uniform: {} values, {} samples/value => {} samples",
            expected.len(),
            samples_per_value,
            total_samples
        );
    }

    let mut all_counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();

    for _ in 0..total_samples {
        let sample = sampler().expect("There are expected values, so sampler must return one");

        match all_counts.get_mut(&sample) {
            None => panic!("Non-expected value {:?} was sampled", sample),
            Some(count) => *count += 1,
        }
    }

    if print {
        for (value, count) in all_counts.iter().sorted_by_key(|&(_, count)| *count) {
            println!(
                "  value {:?} sampled {} ~ {}",
                value,
                count,
                *count as f32 / samples_per_value as f32
            );
        }
    }

    for value in expected {
        let count = all_counts[value];
        assert!(count > 0, "Never sampled expected value {:?}", value);

        let relative = count as f32 / samples_per_value as f32;
        assert!(
            (0.8..1.2).contains(&relative),
            "Value {:?} was over/under sampled {} ~ {}",
            value,
            count,
            relative,
        );
    }
}

/// Play the given tiles in order starting from an empty board, printing every intermediate board.
pub fn board_with_tiles(dimension: usize, tiles: &[usize]) -> Board {
    let mut board = Board::with_dimension(dimension);
    println!("{}", board);

    for &index in tiles {
        board = board
            .play_tile(index)
            .unwrap_or_else(|e| panic!("Failed to play {} on\n{}: {}", index, board, e));
        println!("{}", board);
    }

    board
}

/// Play random legal moves until the game is done, returning the moves that were played.
pub fn random_game(start: &Board, rng: &mut impl Rng) -> (Board, Vec<Move>) {
    let mut board = start.clone();
    let mut moves = vec![];

    while !board.is_done() {
        let mv = board.legal_moves()[rng.gen_range(0..board.legal_moves().len())];
        board = board.play(mv).unwrap();
        moves.push(mv);
    }

    (board, moves)
}

/// Play `n` random moves, starting over whenever the game ends early.
pub fn random_board_with_moves(dimension: usize, n: usize, rng: &mut impl Rng) -> Board {
    'new_try: loop {
        let mut board = Board::with_dimension(dimension);
        for _ in 0..n {
            if board.is_done() {
                continue 'new_try;
            }
            let mv = board.legal_moves()[rng.gen_range(0..board.legal_moves().len())];
            board = board.play(mv).unwrap();
        }
        if board.is_done() {
            continue 'new_try;
        }
        return board;
    }
}
