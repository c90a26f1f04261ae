// SPDX-License-Identifier: MIT OR Apache-2.0

//! Othello Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Rectangular board representation with bounds-checked access
//! - Move legality checks and capture resolution
//! - Scoring and terminal-state detection
//! - Player backends (interactive, search, random)

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod direction;
pub mod engine;
pub mod rules;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A player's game piece, identified by a single printable character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece(pub char);

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board coordinate representing a cell position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0 at the top
    pub row: u8,
    /// Column index, 0 at the left
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Move one cell in the given direction.
    ///
    /// Returns `None` if the step would leave the coordinate space past
    /// the 0 edge; steps past the far edge of a board are caught by the
    /// board's own bounds checks.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (row_delta, col_delta) = direction.delta();
        let row = i16::from(self.row) + i16::from(row_delta);
        let col = i16::from(self.col) + i16::from(col_delta);
        if !(0..=i16::from(u8::MAX)).contains(&row) || !(0..=i16::from(u8::MAX)).contains(&col) {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Row index of the rejected access
        row: u8,
        /// Column index of the rejected access
        col: u8,
    },

    /// The board dimensions cannot host the standard opening
    #[error("board dimensions {rows}x{cols} must be even and at least 2x2")]
    InvalidDimensions {
        /// Requested number of rows
        rows: u8,
        /// Requested number of columns
        cols: u8,
    },

    /// Both players were given the same piece
    #[error("player pieces must be distinct")]
    IdenticalPieces,

    /// A move was requested from a player with no legal move
    #[error("no legal move is available")]
    NoLegalMoves,

    /// The interactive input stream ended before a move was supplied
    #[error("input stream closed before a move was supplied")]
    InputExhausted,
}

// Re-export the main types for convenience
pub use board::Grid;
pub use direction::Direction;
pub use engine::{HumanPlayer, Player, RandomPlayer, SearchPlayer};
pub use rules::Game;
