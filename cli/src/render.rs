// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use othello_core::{Coord, Grid};

/// Render the game board as ASCII art
pub fn render_grid(grid: &Grid) -> String {
    let horizontal_edge = "--".repeat(grid.cols() as usize + 1);
    let mut output = String::new();

    output.push_str(&horizontal_edge);
    output.push_str(" \n");

    for row in 0..grid.rows() {
        output.push_str("| ");
        for col in 0..grid.cols() {
            match grid.get(Coord::new(row, col)) {
                Ok(Some(piece)) => {
                    output.push(piece.0);
                    output.push(' ');
                }
                _ => output.push_str(". "),
            }
        }
        output.push_str("|\n");
    }

    output.push(' ');
    output.push_str(&horizontal_edge);
    output.push('\n');

    output
}
