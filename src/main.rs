use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_engine::game_state::game_state::{GameState, GameStatus};
use chess_engine::utils::random_game::play_random_move;
use chess_engine::utils::session_config::SessionConfig;

const HELP: &str = "commands: <move> (e2e4, e7e8q) | undo | moves | fen | board | random | help | quit";

fn main() -> ExitCode {
    let config = SessionConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut game = match config.initial_state() {
        Ok(game) => game,
        Err(err) => {
            error!(%err, fen = %config.start_fen, "cannot start session");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(fen = %game.to_fen(), "session started");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_position(&mut game);
    println!("{HELP}");

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let command = line.trim();

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => print_position(&mut game),
            "fen" => println!("{}", game.to_fen()),
            "moves" => {
                let moves: Vec<String> = game
                    .generate_legal_moves()
                    .iter()
                    .map(|mv| mv.to_long_algebraic())
                    .collect();
                println!("{} legal: {}", moves.len(), moves.join(" "));
            }
            "undo" => match game.undo_move() {
                Ok(mv) => {
                    println!("undid {mv}");
                    print_position(&mut game);
                }
                Err(err) => println!("{err}"),
            },
            "random" => match play_random_move(&mut game, &mut rng) {
                Some(mv) => {
                    println!("played {mv}");
                    print_position(&mut game);
                }
                None => println!("no legal moves"),
            },
            notation => match game.apply_long_algebraic(notation) {
                Ok(_) => print_position(&mut game),
                Err(err) => println!("{err}"),
            },
        }

        stdout.flush().ok();
    }

    ExitCode::SUCCESS
}

fn print_position(game: &mut GameState) {
    println!("{game}");
    let status = match game.status() {
        GameStatus::Ongoing => "",
        GameStatus::Check => " (check)",
        GameStatus::Checkmate => " (checkmate)",
        GameStatus::Stalemate => " (stalemate)",
    };
    println!("{} to move{status}", game.side_to_move());
}
