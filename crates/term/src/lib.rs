//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: a [`GameView`] paints a
//! [`core::GameSnapshot`](crate::core::GameSnapshot) into a [`FrameBuffer`], and a
//! [`TerminalRenderer`] flushes framebuffers to the terminal. No widget or
//! layout library is involved, which keeps control over the aspect ratio
//! (2 columns per board cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_env_core as core;
pub use tetris_env_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, PREVIEW_COUNT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
