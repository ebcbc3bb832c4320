//! Falling-block puzzle environment (workspace facade crate).
//!
//! The engine and front-end pieces live in dedicated crates under `crates/`;
//! this package re-exports them as `tetris_env::{core,input,term,types}` and
//! adds the pieces shared by the binary: log setup and the stdin agent loop.

pub mod agent;
pub mod logging;

pub use tetris_env_core as core;
pub use tetris_env_input as input;
pub use tetris_env_term as term;
pub use tetris_env_types as types;
