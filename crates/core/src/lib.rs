//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all engine state. It has no
//! dependency on terminals, stdin or files, so the same engine drives the
//! interactive front-end, the scripted agent loop and the tests.
//!
//! # Module Structure
//!
//! - [`shapes`]: orientation grids for the seven piece kinds and rotation order
//! - [`piece`]: the active piece; proposes candidate moves and rotations
//! - [`board`]: 10x22 grid with validity checks, locking and line clearing
//! - [`queue`]: fixed-capacity next-piece queue
//! - [`rng`]: injectable piece sources (seeded uniform, scripted)
//! - [`scoring`]: line-clear table and per-row drop score
//! - [`observation`]: fixed-shape numeric encodings of the visible state
//! - [`game`]: the engine that applies one action per step
//! - [`snapshot`]: read-only projection for renderers
//! - [`config`]: engine configuration with environment overrides
//!
//! # Game Rules
//!
//! - **Uniform pieces**: every spawn is an independent uniform draw over the
//!   seven kinds
//! - **Vertical kicks**: a blocked rotation retries one row down, then one row up
//! - **Hold**: one slot, usable once until the next lock
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 rows, plus one point per row
//!   moved down by a soft or hard drop
//! - **Horizon**: an episode may be capped at a number of counted steps
//!
//! # Example
//!
//! ```
//! use tetris_env_core::{EngineConfig, Tetris};
//! use tetris_env_types::Action;
//!
//! let mut game = Tetris::new(EngineConfig::default().with_seed(12345));
//! let obs = game.reset();
//! assert_eq!((obs.rows, obs.cols), (32, 10));
//!
//! game.step(Action::MoveRight);
//! game.step(Action::RotateCw);
//! let result = game.step(Action::HardDrop);
//!
//! assert!(result.reward > 0); // Hard drop awards points per row
//! assert_eq!(game.get_score(), result.reward);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod observation;
pub mod piece;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tetris_env_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, VisibleBoard};
pub use config::EngineConfig;
pub use game::{EpisodeSummary, GameOverCause, Render, RenderMode, StepResult, Tetris};
pub use observation::{Observation, ObservationMode};
pub use piece::{Piece, Position};
pub use queue::NextQueue;
pub use rng::{PieceSource, ScriptedSource, UniformSource};
pub use scoring::{drop_score, line_clear_score};
pub use shapes::{get_shape, get_spawn_shape, ShapeGrid};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
