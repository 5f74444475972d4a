//! Pure tic-tac-toe game logic.
//!
//! This crate owns everything that can be tested without a terminal:
//!
//! - **Session**: board state, turn order, win/draw evaluation, session
//!   scores, and the opponent mode.
//! - **Heuristic**: the greedy one-ply move selector for the computer
//!   opponent (win, block, center, corner, anywhere).
//!
//! Rendering and input live in the `tactix_tui` frontend, which owns a
//! [`Session`] and reacts to its state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod position;
mod session;
mod types;

pub mod heuristic;
pub mod rules;

// Crate-level exports - board and state types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - positions
pub use position::Position;

// Crate-level exports - session management
pub use session::{Mode, MoveError, Scoreboard, Session};
