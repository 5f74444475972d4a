//! Game session management.
//!
//! A [`Session`] is the single owner of mutable game state: the board,
//! whose turn it is, the game status, the session scores, and the
//! opponent mode. The frontend owns one session and routes every move
//! request through [`Session::apply_move`].

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use crate::Position;

/// Opponent mode. Switching mode resets the board but not the scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Human X against the built-in computer playing O.
    #[default]
    VsComputer,
    /// Two humans sharing the keyboard.
    VsHuman,
}

impl Mode {
    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::VsComputer => "vs computer",
            Mode::VsHuman => "two player",
        }
    }
}

/// Win counts for the session. Reset only when the process restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Wins recorded for the given player.
    pub fn wins(self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Why a move request was dropped.
///
/// Both cases are expected during normal play; a frontend tolerating
/// stray clicks simply ignores the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square is already occupied.
    #[display("square is already occupied")]
    Occupied,
    /// The game has already ended.
    #[display("game is already over")]
    Finished,
}

/// A complete game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    to_move: Player,
    status: GameStatus,
    scores: Scoreboard,
    mode: Mode,
}

impl Session {
    /// Creates a new session: empty board, X to move.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        info!(mode = mode.name(), "starting session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            scores: Scoreboard::default(),
            mode,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the session scores.
    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    /// Returns the opponent mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Places the current player's mark at `pos`, then evaluates the
    /// result: win, draw, or turn toggle.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] without touching any state when the square
    /// is occupied or the game is over.
    #[instrument(skip(self), fields(pos = %pos, player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            debug!("move dropped, game is over");
            return Err(MoveError::Finished);
        }
        if !self.board.is_empty(pos) {
            debug!("move dropped, square occupied");
            return Err(MoveError::Occupied);
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.evaluate();
        Ok(())
    }

    /// Runs win/draw validation after a placement and advances the turn
    /// when the game continues.
    fn evaluate(&mut self) {
        if let Some((winner, line)) = rules::winning_line(&self.board) {
            info!(winner = %winner, "game won");
            self.scores.record_win(winner);
            self.status = GameStatus::Won { winner, line };
        } else if rules::is_full(&self.board) {
            info!("game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
    }

    /// Clears the board for a fresh game. Scores and mode are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting board");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
    }

    /// Switches opponent mode and resets the board, keeping the scores.
    /// Re-selecting the current mode still resets.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        info!(mode = mode.name(), "switching mode");
        self.mode = mode;
        self.reset();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
