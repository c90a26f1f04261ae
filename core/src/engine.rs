// SPDX-License-Identifier: MIT OR Apache-2.0

//! Player backends: interactive, search, and random

use std::io::{self, BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::rules::Game;
use crate::{Coord, GameError, Piece};

/// Player backend trait for both human and automated players
pub trait Player {
    /// Get the piece this player moves
    fn piece(&self) -> Piece;

    /// Get the next move from this player
    fn next_move(&mut self, game: &Game) -> Result<Coord, GameError>;
}

/// Interactive player reading moves from a buffered input source.
///
/// Coordinates are entered column first, then row, and converted to
/// (row, col) internally. Invalid input is reported and re-prompted
/// indefinitely; the only failure is a closed input stream.
pub struct HumanPlayer<R> {
    piece: Piece,
    input: R,
}

impl HumanPlayer<io::BufReader<io::Stdin>> {
    /// Create a player reading from stdin
    pub fn new(piece: Piece) -> Self {
        Self::with_input(piece, io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> HumanPlayer<R> {
    /// Create a player reading from the supplied input source
    pub fn with_input(piece: Piece, input: R) -> Self {
        Self { piece, input }
    }

    /// Prompt until a non-negative integer is entered
    fn read_index(&mut self, prompt: &str) -> Result<u8, GameError> {
        loop {
            print!("{prompt}");
            let _ = io::stdout().flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Err(GameError::InputExhausted),
                Ok(_) => {}
            }
            match line.trim().parse::<u8>() {
                Ok(value) => return Ok(value),
                Err(_) => println!("Value must be a positive integer."),
            }
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn next_move(&mut self, _game: &Game) -> Result<Coord, GameError> {
        let col = self.read_index("Enter col: ")?;
        let row = self.read_index("Enter row: ")?;
        Ok(Coord::new(row, col))
    }
}

/// Automated player running a depth-limited minimax search.
///
/// Candidate moves are evaluated against cloned game states, so the
/// canonical board is never mutated during look-ahead. Ties break
/// toward the first candidate in row-major order, keeping the choice
/// deterministic.
pub struct SearchPlayer {
    piece: Piece,
    depth: u8,
}

impl SearchPlayer {
    /// Search depth used by [`SearchPlayer::new`]
    pub const DEFAULT_DEPTH: u8 = 5;

    /// Create a player searching to the default depth
    pub fn new(piece: Piece) -> Self {
        Self::with_depth(piece, Self::DEFAULT_DEPTH)
    }

    /// Create a player searching `depth` plies ahead
    pub fn with_depth(piece: Piece, depth: u8) -> Self {
        Self { piece, depth }
    }
}

impl Player for SearchPlayer {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn next_move(&mut self, game: &Game) -> Result<Coord, GameError> {
        let opponent = game.opponent_of(self.piece);
        let mut best_coord = None;
        let mut best_value = i32::MIN;

        for coord in game.legal_moves(self.piece) {
            let mut look_ahead = game.clone();
            look_ahead.play_move(coord, self.piece)?;
            let value = minimax(&look_ahead, self.piece, opponent, self.depth);
            if value > best_value {
                best_value = value;
                best_coord = Some(coord);
            }
        }

        let coord = best_coord.ok_or(GameError::NoLegalMoves)?;
        tracing::debug!(row = coord.row, col = coord.col, value = best_value, "search selected move");
        Ok(coord)
    }
}

/// Evaluate a position for `maximizing` with `to_move` on turn.
///
/// A side with no legal move passes; when neither side can move the
/// position is terminal and scored directly.
fn minimax(game: &Game, maximizing: Piece, to_move: Piece, depth: u8) -> i32 {
    if depth == 0 {
        return score_difference(game, maximizing);
    }

    let moves = game.legal_moves(to_move);
    let opponent = game.opponent_of(to_move);
    if moves.is_empty() {
        if game.legal_moves_remain(opponent) {
            return minimax(game, maximizing, opponent, depth - 1);
        }
        return score_difference(game, maximizing);
    }

    let mut best = if to_move == maximizing {
        i32::MIN
    } else {
        i32::MAX
    };
    for coord in moves {
        let mut look_ahead = game.clone();
        if look_ahead.play_move(coord, to_move).is_err() {
            continue;
        }
        let value = minimax(&look_ahead, maximizing, opponent, depth - 1);
        best = if to_move == maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Piece-count differential from `piece`'s perspective
fn score_difference(game: &Game, piece: Piece) -> i32 {
    let own = game.calculate_score(piece) as i32;
    let opposing = game.calculate_score(game.opponent_of(piece)) as i32;
    own - opposing
}

/// Automated player selecting uniformly at random from legal moves
pub struct RandomPlayer {
    piece: Piece,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a player seeded from the operating system
    pub fn new(piece: Piece) -> Self {
        Self {
            piece,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a player with a fixed seed, for reproducible games
    pub fn from_seed(piece: Piece, seed: u64) -> Self {
        Self {
            piece,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn piece(&self) -> Piece {
        self.piece
    }

    fn next_move(&mut self, game: &Game) -> Result<Coord, GameError> {
        let moves = game.legal_moves(self.piece);
        if moves.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        Ok(moves[self.rng.gen_range(0..moves.len())])
    }
}
