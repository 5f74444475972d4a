//! Heuristic move selection for the computer opponent.
//!
//! Greedy one-ply priority: take a winning square, block the opponent's
//! winning square, take the center, take a random empty corner, take any
//! random empty square. There is no look-ahead, so the opponent cannot
//! see forks coming and remains beatable.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::rules::LINES;
use crate::types::{Board, Player, Square};
use crate::Position;

const CORNERS: [Position; 4] = [
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
];

/// Picks a move for `mark` on the given board.
///
/// The random generator breaks ties in the corner and fallback rules;
/// tests pass a seeded generator for determinism. Returns `None` only
/// when the board has no empty square left.
pub fn pick_move<R: Rng + ?Sized>(board: &Board, mark: Player, rng: &mut R) -> Option<Position> {
    // Rule 1: win now.
    if let Some(pos) = completing_square(board, mark) {
        debug!(pos = %pos, "taking winning square");
        return Some(pos);
    }

    // Rule 2: block the opponent.
    if let Some(pos) = completing_square(board, mark.opponent()) {
        debug!(pos = %pos, "blocking opponent");
        return Some(pos);
    }

    // Rule 3: center.
    if board.is_empty(Position::Center) {
        debug!("taking center");
        return Some(Position::Center);
    }

    // Rule 4: random empty corner.
    let corners: Vec<Position> = CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = corners.choose(rng) {
        debug!(pos = %pos, "taking corner");
        return Some(pos);
    }

    // Rule 5: anywhere that is still open.
    Position::valid_moves(board).choose(rng).copied()
}

/// Finds the square that completes a line for `mark`.
///
/// A line qualifies only when exactly two of its three squares hold
/// `mark` and the third is empty; the empty square may sit in any of
/// the three slots. Lines are scanned in [`LINES`] order.
fn completing_square(board: &Board, mark: Player) -> Option<Position> {
    for line in LINES {
        let mut held = 0;
        let mut open = None;
        for pos in line {
            match board.get(pos) {
                Square::Empty => open = Some(pos),
                Square::Occupied(p) if p == mark => held += 1,
                Square::Occupied(_) => {}
            }
        }
        if held == 2 {
            if let Some(pos) = open {
                return Some(pos);
            }
        }
    }

    None
}
