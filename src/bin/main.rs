use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use grid_ttt::board::Outcome;
use grid_ttt::game::{Game, GameRecord, GameSettings, GridOption, MinimaxOption, PlayerOption};

/// Play N×N tic-tac-toe in the terminal, against a friend or the minimax bot.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension, between 3 and 5.
    #[arg(long, default_value_t = 3)]
    grid: u8,

    /// Let the bot play X.
    #[arg(long)]
    cross_ai: bool,

    /// Let the bot play O.
    #[arg(long)]
    nought_ai: bool,

    /// Bot search depth, between 2 and 5. Defaults to 4 if any side is played by the bot.
    #[arg(long)]
    depth: Option<u8>,

    /// Continue a game saved as JSON, its settings replace the ones given on the command line.
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the game as JSON when leaving.
    #[arg(long)]
    save: Option<PathBuf>,

    #[arg(long, default_value = "warn")]
    log_level: log::Level,
}

const DEFAULT_DEPTH: u8 = 4;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let mut game = match &args.load {
        Some(path) => {
            info!("Loading game from {:?}", path);
            let record = GameRecord::from_json(&std::fs::read_to_string(path)?)?;
            Game::from_record(&record)?
        }
        None => Game::new(settings_from_args(&args)?),
    };

    play(&mut game)?;

    if let Some(path) = &args.save {
        info!("Saving game to {:?}", path);
        std::fs::write(path, game.record().to_json()?)?;
    }

    Ok(())
}

fn settings_from_args(args: &Args) -> Result<GameSettings, Box<dyn Error>> {
    let players = PlayerOption {
        cross_ai: args.cross_ai,
        nought_ai: args.nought_ai,
    };

    let depth = match args.depth {
        Some(depth) => Some(depth),
        None if players.cross_ai || players.nought_ai => Some(DEFAULT_DEPTH),
        None => None,
    };

    Ok(GameSettings {
        grid: GridOption::new(args.grid)?,
        players,
        minimax: depth.map(MinimaxOption::new).transpose()?,
    })
}

fn play(game: &mut Game) -> Result<(), Box<dyn Error>> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", game.board());

        match game.outcome() {
            Some(Outcome::WonBy(league)) => {
                println!("{} has won the game", league);
                return Ok(());
            }
            Some(Outcome::Draw) => {
                println!("It's a tie");
                return Ok(());
            }
            None => {}
        }

        if game.bot_to_move() {
            let mv = game.play_bot_move()?;
            println!("Bot plays {}", mv.notation(game.board().dimension()));
            continue;
        }

        print!("{} to move (index, `col row`, undo, redo, `back n` or quit): ", game.board().league());
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        match line.trim() {
            "quit" | "q" => return Ok(()),
            "undo" | "u" => {
                if !game.undo()? {
                    println!("Nothing to undo");
                }
            }
            "redo" | "r" => {
                if !game.redo()? {
                    println!("Nothing to redo");
                }
            }
            input if input.starts_with("back ") => match input["back ".len()..].trim().parse::<usize>() {
                Ok(index) => {
                    if !game.restore_to(index)? {
                        println!("Move {} is the last move or does not exist", index);
                    }
                }
                Err(_) => println!("Could not parse {:?}", input),
            },
            input => match parse_tile(input, game.board().dimension()) {
                Some(index) => {
                    if let Err(e) = game.play_tile(index) {
                        warn!("Rejected move {:?}: {}", input, e);
                        println!("{}", e);
                    }
                }
                None => println!("Could not parse {:?}", input),
            },
        }
    }
}

/// Either a single tile index or a `col row` pair.
fn parse_tile(input: &str, dimension: usize) -> Option<usize> {
    let parts: Vec<usize> = input
        .split_whitespace()
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;

    match parts[..] {
        [index] => Some(index),
        [col, row] if col < dimension && row < dimension => Some(row * dimension + col),
        _ => None,
    }
}
