// SPDX-License-Identifier: MIT OR Apache-2.0

//! Othello CLI - play Othello in the terminal
//!
//! This binary wires the core rules engine to the terminal: it parses
//! the player line-up from the command line, sequences turns, validates
//! and applies moves, and reports the outcome.

mod render;

use std::cmp::Ordering;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use othello_core::{Game, HumanPlayer, Piece, Player, RandomPlayer, SearchPlayer};

use crate::render::render_grid;

const PLAYER_ONE_PIECE: Piece = Piece('X');
const PLAYER_TWO_PIECE: Piece = Piece('O');

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "othello", about = "Othello (Reversi) played in the terminal", version)]
struct Args {
    /// Controller for player one (moves first, plays 'X')
    #[clap(value_enum)]
    player_one: PlayerKind,

    /// Controller for player two (plays 'O')
    #[clap(value_enum)]
    player_two: PlayerKind,

    /// Number of board rows (must be even)
    #[clap(long, default_value = "4")]
    rows: u8,

    /// Number of board columns (must be even)
    #[clap(long, default_value = "4")]
    cols: u8,

    /// Look-ahead depth for minimax players
    #[clap(long, default_value = "5")]
    depth: u8,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

/// Controller behind a player's moves
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PlayerKind {
    /// Moves typed at the terminal
    Human,
    /// Depth-limited minimax search
    Minimax,
    /// Uniformly random legal moves
    Random,
}

fn build_player(kind: PlayerKind, piece: Piece, depth: u8) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(piece)),
        PlayerKind::Minimax => Box::new(SearchPlayer::with_depth(piece, depth)),
        PlayerKind::Random => Box::new(RandomPlayer::new(piece)),
    }
}

/// Main entry point
fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let mut game = Game::new(args.rows, args.cols, PLAYER_ONE_PIECE, PLAYER_TWO_PIECE)?;
    game.initialize()?;

    let mut player_one = build_player(args.player_one, PLAYER_ONE_PIECE, args.depth);
    let mut player_two = build_player(args.player_two, PLAYER_TWO_PIECE, args.depth);

    run_game(&mut game, player_one.as_mut(), player_two.as_mut())
}

/// Run the turn loop until neither player has a legal move
fn run_game<'a>(game: &mut Game, player_one: &'a mut dyn Player, player_two: &'a mut dyn Player) -> Result<()> {
    println!("{}", render_grid(game.grid()));

    let mut player_one_active = true;
    let mut consecutive_passes = 0u8;

    loop {
        let (player, label) = if player_one_active {
            (&mut *player_one, "Player 1")
        } else {
            (&mut *player_two, "Player 2")
        };
        let piece = player.piece();

        if game.legal_moves_remain(piece) {
            consecutive_passes = 0;
            println!("{label} ({piece}) to move:");
            process_move(game, player)?;
            println!("{}", render_grid(game.grid()));
        } else {
            println!("{label} ({piece}) has no moves available...");
            consecutive_passes += 1;
            if consecutive_passes == 2 {
                break;
            }
        }

        player_one_active = !player_one_active;
    }

    report_outcome(game);
    Ok(())
}

/// Ask the active player for moves until a legal one is played
fn process_move(game: &mut Game, player: &mut dyn Player) -> Result<()> {
    loop {
        let coord = player.next_move(game)?;
        if game.is_legal_move(coord, player.piece()) {
            let flipped = game.play_move(coord, player.piece())?;
            tracing::debug!(row = coord.row, col = coord.col, flipped, "turn resolved");
            println!("Move: [{}, {}]\n", coord.col, coord.row);
            return Ok(());
        }
        println!("ERROR: Invalid move!");
    }
}

/// Print the final score and the winner, with a tie as its own outcome
fn report_outcome(game: &Game) {
    let score_one = game.calculate_score(game.player_one());
    let score_two = game.calculate_score(game.player_two());
    println!(
        "Final score: {} {} - {} {}",
        game.player_one(),
        score_one,
        game.player_two(),
        score_two
    );
    match score_one.cmp(&score_two) {
        Ordering::Greater => println!("Player 1 wins!"),
        Ordering::Less => println!("Player 2 wins!"),
        Ordering::Equal => println!("Tie game!"),
    }
}
