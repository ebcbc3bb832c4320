//! Interactive terminal loop.
//!
//! Renders at a fixed frame rate, maps key presses to engine actions and moves
//! the active piece down on a timer. The timer only runs while a game is in
//! progress; after a game over the player starts the next one with Enter.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::info;

use tetris_env::core::{PieceSource, Tetris};
use tetris_env::input::{handle_key_event, is_press, is_start_key, should_quit};
use tetris_env::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_env::types::{Action, FRAME_MS};

pub fn run<S: PieceSource>(
    term: &mut TerminalRenderer,
    game: &mut Tetris<S>,
    drop_interval: Duration,
) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_drop = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Handle input until the next frame is due.
        let deadline = Instant::now() + frame;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if is_press(key) => {
                    if should_quit(key) {
                        info!("quit at score {}", game.get_score());
                        return Ok(());
                    }
                    let playing = game.started() && !game.is_game_over();
                    if !playing {
                        if is_start_key(key) {
                            game.reset();
                            last_drop = Instant::now();
                        }
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.step(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if game.started() && !game.is_game_over() && last_drop.elapsed() >= drop_interval {
            game.step(Action::MoveDown);
            last_drop = Instant::now();
        }
    }
}
