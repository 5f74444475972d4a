//! Application state and event handling.

use crossterm::event::KeyCode;
use std::time::Duration;
use tactix_core::{heuristic, GameStatus, Mode, Player, Position, Session};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::input;

/// Events delivered to the UI loop from outside the terminal.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// A scheduled computer reply fired. The generation records which
    /// game it was scheduled for; a stale reply is discarded.
    ComputerTurn {
        /// Value of the app's generation counter at scheduling time.
        generation: u64,
    },
}

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    generation: u64,
    thinking: bool,
    delay: Duration,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    /// Creates a new application.
    pub fn new(mode: Mode, delay: Duration, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            session: Session::new(mode),
            cursor: Position::Center,
            generation: 0,
            thinking: false,
            delay,
            events,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line shown under the board.
    pub fn status_text(&self) -> String {
        match self.session.status() {
            GameStatus::Won { winner, .. } => format!("Player {winner} wins!"),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
            GameStatus::InProgress if self.thinking => "Computer is thinking...".to_string(),
            GameStatus::InProgress => format!("{}'s turn", self.session.to_move()),
        }
    }

    /// Applies a move requested at the keyboard or mouse.
    ///
    /// Stray requests (occupied square, finished game, or the computer's
    /// turn) are dropped without comment.
    pub fn human_move(&mut self, pos: Position) {
        if self.computer_to_move() {
            debug!(pos = %pos, "input dropped while the computer is on the move");
            return;
        }
        if self.session.apply_move(pos).is_err() {
            return;
        }
        self.schedule_computer();
    }

    /// Moves the keyboard cursor.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Clears the board for a new game. Scores stay.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.thinking = false;
        self.session.reset();
    }

    /// Switches opponent mode; the board resets, scores stay.
    pub fn set_mode(&mut self, mode: Mode) {
        self.generation += 1;
        self.thinking = false;
        self.session.set_mode(mode);
    }

    /// Handles a non-terminal event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComputerTurn { generation } => {
                if generation != self.generation {
                    debug!(generation, "discarding stale computer turn");
                    return;
                }
                self.thinking = false;
                if !self.computer_to_move() {
                    return;
                }
                let Some(pos) =
                    heuristic::pick_move(self.session.board(), Player::O, &mut rand::thread_rng())
                else {
                    return;
                };
                info!(pos = %pos, "computer plays");
                let _ = self.session.apply_move(pos);
            }
        }
    }

    fn computer_to_move(&self) -> bool {
        self.session.mode() == Mode::VsComputer
            && self.session.status() == GameStatus::InProgress
            && self.session.to_move() == Player::O
    }

    /// Schedules the deferred computer reply when it is O's turn in
    /// vs-computer mode. The sleep happens off the UI loop; the reply
    /// comes back through the event channel and is re-validated there.
    fn schedule_computer(&mut self) {
        if !self.computer_to_move() {
            return;
        }
        self.thinking = true;
        let generation = self.generation;
        let delay = self.delay;
        let events = self.events.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::ComputerTurn { generation });
        });
    }
}
