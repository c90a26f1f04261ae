// SPDX-License-Identifier: MIT OR Apache-2.0

use othello_core::{Coord, Game, GameError, Grid, Piece, Player, RandomPlayer};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DARK: Piece = Piece('X');
const LIGHT: Piece = Piece('O');

/// One of the two opening layouts on a 4x4 board: dark on the
/// top-left/bottom-right diagonal.
fn opened_game() -> Game {
    let mut grid = Grid::new(4, 4);
    grid.set(Coord::new(1, 1), Some(DARK)).unwrap();
    grid.set(Coord::new(2, 2), Some(DARK)).unwrap();
    grid.set(Coord::new(1, 2), Some(LIGHT)).unwrap();
    grid.set(Coord::new(2, 1), Some(LIGHT)).unwrap();
    Game::from_grid(grid, DARK, LIGHT).unwrap()
}

#[test]
fn opening_legal_moves() {
    let game = opened_game();

    let dark_moves = game.legal_moves(DARK);
    assert_eq!(
        dark_moves,
        vec![
            Coord::new(0, 2),
            Coord::new(1, 3),
            Coord::new(2, 0),
            Coord::new(3, 1),
        ]
    );

    let light_moves = game.legal_moves(LIGHT);
    assert_eq!(
        light_moves,
        vec![
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(2, 3),
            Coord::new(3, 2),
        ]
    );
}

#[test]
fn playing_a_move_flips_the_bracketed_run() {
    let mut game = opened_game();
    assert_eq!(game.calculate_score(DARK), 2);

    assert!(game.is_legal_move(Coord::new(0, 2), DARK));
    let flipped = game.play_move(Coord::new(0, 2), DARK).unwrap();

    assert_eq!(flipped, 1);
    assert_eq!(game.grid().get(Coord::new(1, 2)).unwrap(), Some(DARK));
    // Score rises by one placed piece plus the flipped run
    assert_eq!(game.calculate_score(DARK), 2 + 1 + flipped);
    assert_eq!(game.calculate_score(LIGHT), 1);
}

#[test]
fn occupied_and_out_of_bounds_candidates_are_illegal() {
    let game = opened_game();

    assert!(!game.is_legal_move(Coord::new(1, 1), DARK));
    assert!(!game.is_legal_move(Coord::new(1, 2), DARK));
    assert!(!game.is_legal_move(Coord::new(4, 0), DARK));
    assert!(!game.is_legal_move(Coord::new(0, 4), LIGHT));
    assert!(!game.is_legal_move(Coord::new(200, 200), LIGHT));
}

#[test]
fn empty_cell_without_a_bracket_is_illegal() {
    let game = opened_game();
    // (0, 0) touches only pieces of the mover or empty cells
    assert!(!game.is_legal_move(Coord::new(0, 0), DARK));
    assert!(!game.is_legal_move(Coord::new(0, 0), LIGHT));
}

#[test]
fn adjacent_own_piece_is_not_a_bracket() {
    // A ray with zero opposing pieces before the own piece must not count
    let mut grid = Grid::new(4, 4);
    grid.set(Coord::new(1, 1), Some(DARK)).unwrap();
    let game = Game::from_grid(grid, DARK, LIGHT).unwrap();

    assert!(!game.is_legal_move(Coord::new(0, 0), DARK));
}

#[test]
fn captures_resolve_in_every_direction() {
    let mut grid = Grid::new(4, 4);
    grid.set(Coord::new(0, 0), Some(DARK)).unwrap();
    grid.set(Coord::new(0, 2), Some(DARK)).unwrap();
    grid.set(Coord::new(2, 0), Some(DARK)).unwrap();
    grid.set(Coord::new(1, 1), Some(LIGHT)).unwrap();
    grid.set(Coord::new(1, 2), Some(LIGHT)).unwrap();
    grid.set(Coord::new(2, 1), Some(LIGHT)).unwrap();
    let mut game = Game::from_grid(grid, DARK, LIGHT).unwrap();

    // (2, 2) brackets along three rays at once
    assert!(game.is_legal_move(Coord::new(2, 2), DARK));
    let flipped = game.play_move(Coord::new(2, 2), DARK).unwrap();

    assert_eq!(flipped, 3);
    assert_eq!(game.calculate_score(DARK), 7);
    assert_eq!(game.calculate_score(LIGHT), 0);
}

#[test]
fn a_long_run_flips_completely() {
    let mut grid = Grid::new(4, 4);
    grid.set(Coord::new(0, 0), Some(DARK)).unwrap();
    grid.set(Coord::new(1, 1), Some(LIGHT)).unwrap();
    grid.set(Coord::new(2, 2), Some(LIGHT)).unwrap();
    let mut game = Game::from_grid(grid, DARK, LIGHT).unwrap();

    let flipped = game.play_move(Coord::new(3, 3), DARK).unwrap();

    assert_eq!(flipped, 2);
    assert_eq!(game.grid().get(Coord::new(1, 1)).unwrap(), Some(DARK));
    assert_eq!(game.grid().get(Coord::new(2, 2)).unwrap(), Some(DARK));
}

#[test]
fn play_move_reports_out_of_bounds() {
    let mut game = opened_game();
    let result = game.play_move(Coord::new(9, 9), DARK);
    assert_eq!(result, Err(GameError::OutOfBounds { row: 9, col: 9 }));
}

#[test]
fn no_moves_remain_on_a_full_board() {
    let mut grid = Grid::new(2, 2);
    grid.set(Coord::new(0, 0), Some(DARK)).unwrap();
    grid.set(Coord::new(0, 1), Some(DARK)).unwrap();
    grid.set(Coord::new(1, 0), Some(LIGHT)).unwrap();
    grid.set(Coord::new(1, 1), Some(LIGHT)).unwrap();
    let game = Game::from_grid(grid, DARK, LIGHT).unwrap();

    assert!(!game.legal_moves_remain(DARK));
    assert!(!game.legal_moves_remain(LIGHT));
}

#[test]
fn construction_rejects_bad_configurations() {
    assert_eq!(
        Game::new(3, 4, DARK, LIGHT),
        Err(GameError::InvalidDimensions { rows: 3, cols: 4 })
    );
    assert_eq!(
        Game::new(4, 3, DARK, LIGHT),
        Err(GameError::InvalidDimensions { rows: 4, cols: 3 })
    );
    assert_eq!(
        Game::new(0, 0, DARK, LIGHT),
        Err(GameError::InvalidDimensions { rows: 0, cols: 0 })
    );
    assert_eq!(Game::new(4, 4, DARK, DARK), Err(GameError::IdenticalPieces));
}

#[test]
fn random_game_preserves_board_invariants() {
    let mut game = Game::new(4, 4, DARK, LIGHT).unwrap();
    game.initialize_with(&mut StdRng::seed_from_u64(11)).unwrap();

    let mut dark_player = RandomPlayer::from_seed(DARK, 1);
    let mut light_player = RandomPlayer::from_seed(LIGHT, 2);

    let mut total = game.calculate_score(DARK) + game.calculate_score(LIGHT);
    assert_eq!(total, 4);

    let mut dark_to_move = true;
    let mut consecutive_passes = 0;
    while consecutive_passes < 2 {
        let player: &mut dyn Player = if dark_to_move {
            &mut dark_player
        } else {
            &mut light_player
        };
        let piece = player.piece();

        if game.legal_moves_remain(piece) {
            consecutive_passes = 0;
            let coord = player.next_move(&game).unwrap();
            let flipped = game.play_move(coord, piece).unwrap();
            assert!(flipped >= 1, "every legal move must capture");

            // One piece placed, flips only convert existing pieces
            let new_total = game.calculate_score(DARK) + game.calculate_score(LIGHT);
            assert_eq!(new_total, total + 1);
            total = new_total;
        } else {
            consecutive_passes += 1;
        }
        dark_to_move = !dark_to_move;
    }

    assert!(!game.legal_moves_remain(DARK));
    assert!(!game.legal_moves_remain(LIGHT));
    assert!(total <= 16);
}
