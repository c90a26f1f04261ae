// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and move resolution logic

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::board::Grid;
use crate::direction::Direction;
use crate::{Coord, GameError, Piece};

/// State of an in-progress ray walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayScan {
    /// Still looking for the first opposing piece next to the origin
    SeekingOpposing,
    /// At least one opposing piece seen, looking for the closing piece
    SeekingClosing,
}

/// An Othello game: a grid plus the two player pieces.
///
/// `Clone` produces a deep, independent copy with its own cell storage,
/// so search code can explore hypothetical futures without touching the
/// canonical state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// The board, owned exclusively by this game
    grid: Grid,
    /// Piece of the player who moves first
    player_one: Piece,
    /// Piece of the second player
    player_two: Piece,
}

impl Game {
    /// Create a game over an empty board.
    ///
    /// Dimensions must be even and at least 2x2 so the standard
    /// four-piece opening has a center block, and the two pieces must be
    /// distinct.
    pub fn new(rows: u8, cols: u8, player_one: Piece, player_two: Piece) -> Result<Self, GameError> {
        Self::from_grid(Grid::new(rows, cols), player_one, player_two)
    }

    /// Create a game over an externally prepared position
    pub fn from_grid(grid: Grid, player_one: Piece, player_two: Piece) -> Result<Self, GameError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows < 2 || cols < 2 || rows % 2 != 0 || cols % 2 != 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }
        if player_one == player_two {
            return Err(GameError::IdenticalPieces);
        }
        Ok(Self {
            grid,
            player_one,
            player_two,
        })
    }

    /// Get the board for read-only consumers such as renderers
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the piece of the player who moves first
    pub fn player_one(&self) -> Piece {
        self.player_one
    }

    /// Get the piece of the second player
    pub fn player_two(&self) -> Piece {
        self.player_two
    }

    /// Get the piece opposing the given one
    pub fn opponent_of(&self, piece: Piece) -> Piece {
        if piece == self.player_one {
            self.player_two
        } else {
            self.player_one
        }
    }

    /// Place the four-piece opening in the center of the board.
    ///
    /// Which piece takes the top-left/bottom-right diagonal is an
    /// unbiased coin flip, so the two mirror layouts are equally likely.
    /// Called once, before any moves.
    pub fn initialize(&mut self) -> Result<(), GameError> {
        self.initialize_with(&mut rand::thread_rng())
    }

    /// Place the opening using the supplied random source
    pub fn initialize_with<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let top = self.grid.rows() / 2 - 1;
        let left = self.grid.cols() / 2 - 1;

        let (diagonal, anti_diagonal) = if rng.gen::<bool>() {
            (self.player_one, self.player_two)
        } else {
            (self.player_two, self.player_one)
        };
        tracing::debug!(%diagonal, %anti_diagonal, "placing opening pieces");

        self.grid.set(Coord::new(top, left), Some(diagonal))?;
        self.grid.set(Coord::new(top + 1, left + 1), Some(diagonal))?;
        self.grid.set(Coord::new(top, left + 1), Some(anti_diagonal))?;
        self.grid.set(Coord::new(top + 1, left), Some(anti_diagonal))?;
        Ok(())
    }

    /// Check if placing `piece` at `coord` is legal.
    ///
    /// A candidate is legal iff it is in bounds, empty, and at least one
    /// direction holds a bracketing run. Occupied or out-of-bounds
    /// candidates are always `false`, never an error.
    pub fn is_legal_move(&self, coord: Coord, piece: Piece) -> bool {
        if !self.grid.in_bounds(coord) || !self.grid.is_empty(coord) {
            return false;
        }
        Direction::ALL
            .iter()
            .any(|&direction| self.bracket_end(coord, direction, piece).is_some())
    }

    /// Get every legal move for `piece`, in row-major order
    pub fn legal_moves(&self, piece: Piece) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                let coord = Coord::new(row, col);
                if self.is_legal_move(coord, piece) {
                    moves.push(coord);
                }
            }
        }
        moves
    }

    /// Check if any legal move exists for `piece`. Full-board scan.
    pub fn legal_moves_remain(&self, piece: Piece) -> bool {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                if self.is_legal_move(Coord::new(row, col), piece) {
                    return true;
                }
            }
        }
        false
    }

    /// Place `piece` at `coord` and flip every bracketed run.
    ///
    /// The caller has already verified legality; this does not
    /// re-validate. Captures resolve independently per direction, in
    /// [`Direction::ALL`] order. Returns the number of flipped pieces.
    pub fn play_move(&mut self, coord: Coord, piece: Piece) -> Result<usize, GameError> {
        self.grid.set(coord, Some(piece))?;

        let mut flipped = 0;
        for direction in Direction::ALL {
            if let Some(end) = self.bracket_end(coord, direction, piece) {
                flipped += self.flip_run(coord, end, direction, piece)?;
            }
        }
        tracing::debug!(row = coord.row, col = coord.col, %piece, flipped, "move applied");
        Ok(flipped)
    }

    /// Count cells holding `piece`
    pub fn calculate_score(&self, piece: Piece) -> usize {
        self.grid.cells().filter(|&cell| cell == Some(piece)).count()
    }

    /// Walk a ray from `origin` and return the coordinate of the piece
    /// closing a bracketing run, if one exists.
    ///
    /// The walk terminates without a match on the board edge, on an
    /// empty cell, or on an own piece with no opposing pieces in
    /// between.
    fn bracket_end(&self, origin: Coord, direction: Direction, piece: Piece) -> Option<Coord> {
        let opposing = self.opponent_of(piece);
        let mut state = RayScan::SeekingOpposing;
        let mut cursor = origin.step(direction);

        while let Some(coord) = cursor {
            let cell = match self.grid.get(coord) {
                Ok(cell) => cell,
                Err(_) => return None, // walked off the board
            };
            match cell {
                None => return None,
                Some(p) if p == opposing => {
                    state = RayScan::SeekingClosing;
                    cursor = coord.step(direction);
                }
                Some(p) if p == piece => {
                    return match state {
                        RayScan::SeekingClosing => Some(coord),
                        RayScan::SeekingOpposing => None,
                    };
                }
                Some(_) => return None,
            }
        }
        None
    }

    /// Flip every cell strictly between `origin` and `end` to `piece`
    fn flip_run(
        &mut self,
        origin: Coord,
        end: Coord,
        direction: Direction,
        piece: Piece,
    ) -> Result<usize, GameError> {
        let mut flipped = 0;
        let mut cursor = origin.step(direction);
        while let Some(coord) = cursor {
            if coord == end {
                break;
            }
            self.grid.set(coord, Some(piece))?;
            flipped += 1;
            cursor = coord.step(direction);
        }
        Ok(flipped)
    }
}
