//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::Action`] plus the two
//! session keys (start and quit). There is no key-repeat handling here: the
//! engine is turn-based, so every press is exactly one step.

pub mod map;

pub use tetris_env_types as types;

pub use map::{handle_key_event, is_press, is_start_key, should_quit};
