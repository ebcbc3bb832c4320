//! Game engine - applies one action per call to the board, piece and queue
//!
//! The engine is a turn-based state machine: `Idle` until the first
//! [`Tetris::reset`], then `Active` until a spawn fails or the step horizon is
//! reached, then `GameOver` until the next reset. Locking happens inside the
//! `step` call that caused it.
//!
//! Blocked moves, failed rotations, repeated holds and unknown action codes are
//! not errors. They leave the state as it was and report zero reward.

use std::fmt;

use log::{debug, info};

use crate::board::{Board, VisibleBoard};
use crate::config::EngineConfig;
use crate::observation::{encode, Observation};
use crate::piece::Piece;
use crate::queue::NextQueue;
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{drop_score, line_clear_score};
use crate::snapshot::GameSnapshot;
use crate::types::{Action, Direction, PieceKind, Spin};

/// Offsets tried, in order, after a rotation: in place, one row down, one row up
const ROTATION_KICKS: [(i8, i8); 3] = [(0, 0), (0, 1), (0, -1)];

/// Outcome of one [`Tetris::step`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub observation: Observation,
    /// Score gained by this step
    pub reward: u32,
    pub game_over: bool,
}

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverCause {
    /// A piece from the queue did not fit at spawn
    TopOut,
    /// The piece swapped out of hold did not fit at spawn
    HoldTopOut,
    /// The counted-step limit was reached
    Horizon,
}

impl GameOverCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverCause::TopOut => "top-out",
            GameOverCause::HoldTopOut => "hold top-out",
            GameOverCause::Horizon => "horizon",
        }
    }
}

/// Totals of a finished episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub episode_id: u32,
    pub cause: GameOverCause,
    pub score: u32,
    pub lines: u32,
    pub steps: u32,
}

impl fmt::Display for EpisodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "episode {} over ({}): score {}, lines {}, steps {}",
            self.episode_id,
            self.cause.as_str(),
            self.score,
            self.lines,
            self.steps
        )
    }
}

/// Output of [`Tetris::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Structured snapshot for a front-end to draw
    #[default]
    Frame,
    /// Plain-text dump
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Frame(GameSnapshot),
    Text(String),
}

/// The falling-block engine
///
/// Generic over its piece source so tests can script the piece sequence.
#[derive(Debug, Clone)]
pub struct Tetris<S = UniformSource> {
    config: EngineConfig,
    source: S,
    board: Board,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    /// Set by a hold, cleared by the next lock
    swap_used: bool,
    next_queue: NextQueue,
    score: u32,
    lines: u32,
    /// Counted steps in the current episode
    steps: u32,
    started: bool,
    game_over: Option<GameOverCause>,
    /// Monotonic episode id (increments on reset)
    episode_id: u32,
}

impl Tetris<UniformSource> {
    /// Create an engine drawing uniform pieces, seeded from `config.seed` or
    /// from entropy
    pub fn new(config: EngineConfig) -> Self {
        let source = match config.seed {
            Some(seed) => UniformSource::new(seed),
            None => UniformSource::from_entropy(),
        };
        Self::with_source(config, source)
    }

    /// Seed of the uniform source (for reproducing an episode)
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl Default for Tetris<UniformSource> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: PieceSource> Tetris<S> {
    /// Create an engine over an explicit piece source
    ///
    /// The queue is filled immediately; no piece is active until [`reset`].
    ///
    /// # Panics
    ///
    /// Panics if `config.next_queue_size` is zero.
    ///
    /// [`reset`]: Tetris::reset
    pub fn with_source(config: EngineConfig, mut source: S) -> Self {
        let next_queue = NextQueue::filled(config.next_queue_size, &mut source);
        Self {
            config,
            source,
            board: Board::new(),
            active: None,
            hold: None,
            swap_used: false,
            next_queue,
            score: 0,
            lines: 0,
            steps: 0,
            started: false,
            game_over: None,
            episode_id: 0,
        }
    }

    /// Start a new episode and return its first observation
    ///
    /// Clears the board, score, hold slot and step counter, refills the queue
    /// and spawns the first piece. The queue built by the constructor is used
    /// as-is for the first episode.
    pub fn reset(&mut self) -> Observation {
        if self.started {
            self.next_queue = NextQueue::filled(self.config.next_queue_size, &mut self.source);
            self.episode_id = self.episode_id.wrapping_add(1);
        }
        self.board.clear();
        self.active = None;
        self.hold = None;
        self.swap_used = false;
        self.score = 0;
        self.lines = 0;
        self.steps = 0;
        self.game_over = None;
        self.started = true;

        info!(
            "episode {} started (horizon {:?}, queue {}, observation {})",
            self.episode_id,
            self.config.horizon,
            self.config.next_queue_size,
            self.config.observation.as_str()
        );

        self.spawn();
        self.observation()
    }

    /// Apply one action
    ///
    /// Any action other than [`Action::Noop`] that reaches an active piece
    /// counts toward the horizon, whether or not it changed anything.
    pub fn step(&mut self, action: Action) -> StepResult {
        if self.game_over.is_some() || self.active.is_none() {
            return self.idle_result();
        }

        let reward = match action {
            Action::Noop => return self.idle_result(),
            Action::MoveLeft => {
                self.try_move(Direction::Left);
                0
            }
            Action::MoveRight => {
                self.try_move(Direction::Right);
                0
            }
            Action::MoveDown => self.move_down(),
            Action::HardDrop => self.hard_drop(),
            Action::RotateCcw => {
                self.rotate(Spin::CounterClockwise);
                0
            }
            Action::RotateCw => {
                self.rotate(Spin::Clockwise);
                0
            }
            Action::Hold => {
                self.hold();
                0
            }
        };

        self.score = self.score.saturating_add(reward);
        self.steps = self.steps.saturating_add(1);

        if let Some(horizon) = self.config.horizon {
            if self.game_over.is_none() && self.steps >= horizon {
                self.end_game(GameOverCause::Horizon);
            }
        }
        if let Some(summary) = self.episode_summary() {
            info!("{}", summary);
        }

        StepResult {
            observation: self.observation(),
            reward,
            game_over: self.game_over.is_some(),
        }
    }

    /// Apply a raw action code; codes outside 0-7 are no-ops
    pub fn step_code(&mut self, code: i64) -> StepResult {
        match Action::from_code(code) {
            Some(action) => self.step(action),
            None => self.idle_result(),
        }
    }

    /// Current observation in the configured layout
    pub fn observation(&self) -> Observation {
        encode(
            self.config.observation,
            &self.visible_board(),
            self.next_queue.iter(),
        )
    }

    /// Visible rows with the active piece overlaid
    pub fn visible_board(&self) -> VisibleBoard {
        self.board.visible_view(self.active.as_ref())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.visible_board(),
            active: self.active.map(Into::into),
            next_queue: self.next_queue.to_vec(),
            hold: self.hold,
            can_hold: !self.swap_used,
            started: self.started,
            game_over: self.game_over.is_some(),
            score: self.score,
            lines: self.lines,
            steps: self.steps,
            episode_id: self.episode_id,
        }
    }

    /// Pure view of the state for a front-end
    pub fn render(&self, mode: RenderMode) -> Render {
        match mode {
            RenderMode::Frame => Render::Frame(self.snapshot()),
            RenderMode::Text => Render::Text(self.snapshot().to_string()),
        }
    }

    pub fn get_score(&self) -> u32 {
        self.score
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn swap_used(&self) -> bool {
        self.swap_used
    }

    pub fn next_queue(&self) -> &NextQueue {
        &self.next_queue
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn elapsed_steps(&self) -> u32 {
        self.steps
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over
    }

    /// Final totals, once the episode is over
    pub fn episode_summary(&self) -> Option<EpisodeSummary> {
        self.game_over.map(|cause| EpisodeSummary {
            episode_id: self.episode_id,
            cause,
            score: self.score,
            lines: self.lines,
            steps: self.steps,
        })
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn idle_result(&self) -> StepResult {
        StepResult {
            observation: self.observation(),
            reward: 0,
            game_over: self.game_over.is_some(),
        }
    }

    /// Move the active piece one cell if the target is free
    fn try_move(&mut self, direction: Direction) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let candidate = piece.propose_move(direction);
        if self.board.is_valid(candidate.shape, candidate.position) {
            piece.commit_candidate(&candidate);
            true
        } else {
            false
        }
    }

    /// One row down, or lock in place when blocked
    fn move_down(&mut self) -> u32 {
        if self.try_move(Direction::Down) {
            drop_score(1)
        } else {
            self.lock_active()
        }
    }

    fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(Direction::Down) {
            rows += 1;
        }
        drop_score(rows) + self.lock_active()
    }

    fn rotate(&mut self, spin: Spin) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        let rotated = piece.propose_rotate(spin);
        for (dx, dy) in ROTATION_KICKS {
            let candidate = rotated.shifted(dx, dy);
            if self.board.is_valid(candidate.shape, candidate.position) {
                piece.commit_candidate(&candidate);
                return true;
            }
        }
        false
    }

    /// Stash the active piece, taking the held one (or the next spawn) instead
    fn hold(&mut self) {
        if self.swap_used {
            return;
        }
        let Some(mut outgoing) = self.active.take() else {
            return;
        };
        outgoing.reset_to_spawn();

        match self.hold.replace(outgoing.kind()) {
            Some(kind) => {
                let incoming = Piece::new(kind);
                let (shape, pos) = incoming.current();
                if self.board.is_valid(shape, pos) {
                    self.active = Some(incoming);
                } else {
                    self.end_game(GameOverCause::HoldTopOut);
                }
            }
            None => self.spawn(),
        }
        self.swap_used = true;

        debug!(
            "hold {} (active {:?})",
            outgoing.kind().as_str(),
            self.active.map(|p| p.kind())
        );
    }

    /// Write the active piece into the board, clear rows and spawn the next
    ///
    /// Returns the line-clear bonus.
    fn lock_active(&mut self) -> u32 {
        let Some(piece) = self.active.take() else {
            return 0;
        };
        let (shape, pos) = piece.current();
        self.board.lock(shape, pos);

        let cleared = self.board.clear_lines(pos.y);
        let bonus = line_clear_score(cleared);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.swap_used = false;

        debug!(
            "locked {} at ({}, {}) rotation {}, cleared {} (+{})",
            piece.kind().as_str(),
            pos.x,
            pos.y,
            piece.rotation(),
            cleared,
            bonus
        );

        self.spawn();
        bonus
    }

    /// Pop the queue into a new active piece, or end the game if it does not fit
    fn spawn(&mut self) {
        assert!(
            self.active.is_none(),
            "spawn while a piece is still active"
        );
        if self.game_over.is_some() {
            return;
        }

        let piece = Piece::new(self.next_queue.pop(&mut self.source));
        let (shape, pos) = piece.current();
        if self.board.is_valid(shape, pos) {
            self.active = Some(piece);
        } else {
            self.end_game(GameOverCause::TopOut);
        }
    }

    fn end_game(&mut self, cause: GameOverCause) {
        self.active = None;
        self.game_over = Some(cause);
    }
}
