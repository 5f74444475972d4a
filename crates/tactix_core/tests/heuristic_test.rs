//! Tests for the computer opponent's move priorities.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tactix_core::{heuristic, Board, Player, Position, Square};

fn pos(index: usize) -> Position {
    Position::from_index(index).unwrap()
}

/// Builds a board from a 9-character sketch: 'X', 'O', or '.' per square.
fn board(sketch: &str) -> Board {
    assert_eq!(sketch.len(), 9);
    let mut board = Board::new();
    for (index, ch) in sketch.chars().enumerate() {
        let square = match ch {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            '.' => Square::Empty,
            other => panic!("bad sketch char {other}"),
        };
        board.set(pos(index), square);
    }
    board
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn test_takes_winning_square() {
    // O O . on the top row: rule 1 fires and returns index 2.
    let board = board("OO.......");
    let choice = heuristic::pick_move(&board, Player::O, &mut rng());
    assert_eq!(choice, Some(pos(2)));
}

#[test]
fn test_win_beats_block() {
    // Both players threaten a row; O must finish its own.
    let board = board("XX.OO....");
    let choice = heuristic::pick_move(&board, Player::O, &mut rng());
    assert_eq!(choice, Some(pos(5)));
}

#[test]
fn test_blocks_opponent() {
    // X X . on the top row and no O win anywhere: rule 2 returns index 2.
    let board = board("XX.......");
    let choice = heuristic::pick_move(&board, Player::O, &mut rng());
    assert_eq!(choice, Some(pos(2)));
}

#[test]
fn test_completing_square_found_in_any_slot() {
    // The open square sits in the middle of the line.
    let middle_open = board("O.O......");
    assert_eq!(
        heuristic::pick_move(&middle_open, Player::O, &mut rng()),
        Some(pos(1))
    );

    // And in the first slot.
    let first_open = board(".OO......");
    assert_eq!(
        heuristic::pick_move(&first_open, Player::O, &mut rng()),
        Some(pos(0))
    );
}

#[test]
fn test_lone_mark_does_not_trigger_win_or_block() {
    // One X on the top row is not a threat; with no tactics the
    // selector takes the center.
    let board = board("X........");
    let choice = heuristic::pick_move(&board, Player::O, &mut rng());
    assert_eq!(choice, Some(Position::Center));
}

#[test]
fn test_takes_center_when_open() {
    let board = board("X.......O");
    // No line holds two of a kind plus an empty square here.
    let choice = heuristic::pick_move(&board, Player::O, &mut rng());
    assert_eq!(choice, Some(Position::Center));
}

#[test]
fn test_prefers_corner_over_edge() {
    // Center taken, no threats: the pick must be one of the open corners.
    let board = board("....X....");
    let choice = heuristic::pick_move(&board, Player::O, &mut rng()).unwrap();
    assert!(
        [pos(0), pos(2), pos(6), pos(8)].contains(&choice),
        "expected a corner, got {choice}"
    );
}

#[test]
fn test_falls_back_to_any_open_square() {
    // X O X / . X . / O X O: center and corners taken, and every line
    // through the open squares 3 and 5 is mixed, so no win or block
    // fires and the pick falls through to rule 5.
    let board = board("XOX.X.OXO");
    let choice = heuristic::pick_move(&board, Player::O, &mut rng()).unwrap();
    assert!(
        [pos(3), pos(5)].contains(&choice),
        "expected an open edge, got {choice}"
    );
}

#[test]
fn test_full_board_returns_none() {
    let board = board("XOXXOOOXX");
    assert_eq!(heuristic::pick_move(&board, Player::O, &mut rng()), None);
}
