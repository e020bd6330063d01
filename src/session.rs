use crate::Board;
use std::time::Duration;

/// What a single scheduler poll did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// Nothing happened; the session is stopped or the redraw is ahead
    /// of the board.
    Idle,
    /// The configured delay elapsed, so the current board was shown and
    /// the redraw counter advanced past it.
    Redraw,
    /// The board was replaced by its successor to catch up with the
    /// redraw counter.
    Derived,
}

/// Runs a [`Board`] on a fixed polling cadence.
///
/// Every poll does at most one thing: once `delay` has elapsed since the
/// last redraw, the redraw counter moves ahead of the board's generation;
/// the next poll then derives the successor board. Deriving and showing a
/// generation therefore never share a poll, and the visible cadence stays
/// one generation per delay period no matter how fast polling runs.
///
/// The session keeps no clock of its own; callers pass the current time
/// into [`Session::start`] and [`Session::poll`], which keeps the
/// timeline deterministic under test.
pub struct Session {
    board: Board,
    tick: u64,
    delay: Duration,
    last_redraw: Duration,
    running: bool,
}

impl Session {
    pub fn new(board: Board, delay: Duration) -> Self {
        Self {
            tick: board.generation(),
            board,
            delay,
            last_redraw: Duration::ZERO,
            running: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Redraw counter; runs ahead of the board's generation by at most 1.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Changes the pause between shown generations, effective from the
    /// next poll.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts the run and primes the first derivation.
    ///
    /// The prime is skipped when the counter is already ahead of the
    /// board, so stopping and restarting mid-pipeline does not queue an
    /// extra generation.
    pub fn start(&mut self, now: Duration) {
        if self.tick == self.board.generation() {
            self.tick += 1;
        }
        self.last_redraw = now;
        self.running = true;
    }

    /// Freezes the run; the board keeps its state for inspection or edits.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advances the pipeline by one step if the session is running.
    pub fn poll(&mut self, now: Duration) -> Step {
        if !self.running {
            return Step::Idle;
        }
        if now.saturating_sub(self.last_redraw) >= self.delay {
            self.last_redraw = now;
            self.tick += 1;
            Step::Redraw
        } else if self.tick > self.board.generation() {
            self.board = self.board.next_generation();
            Step::Derived
        } else {
            Step::Idle
        }
    }

    /// Derives one generation immediately, outside the polling cadence.
    pub fn step_once(&mut self) {
        self.board = self.board.next_generation();
        self.tick = self.board.generation();
    }

    /// Replaces the board and stops the run.
    pub fn reset(&mut self, board: Board) {
        self.tick = board.generation();
        self.board = board;
        self.running = false;
    }
}
