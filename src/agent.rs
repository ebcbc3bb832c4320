//! Scripted agent loop over stdin/stdout.
//!
//! Input is read character by character: a digit is an action code passed to
//! [`Tetris::step_code`], `r` starts a new episode, `q` stops the loop and
//! everything else (whitespace included) is skipped. After the initial reset
//! and after every command one JSON object is written per line:
//!
//! ```text
//! {"reward":0,"game_over":false,"score":0,"observation":[[0,0,...],...]}
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::core::{Observation, PieceSource, Render, RenderMode, Tetris};

/// One decoded input character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentCommand {
    Step(i64),
    Reset,
    Quit,
}

impl AgentCommand {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| AgentCommand::Step(d as i64)),
            'r' | 'R' => Some(AgentCommand::Reset),
            'q' | 'Q' => Some(AgentCommand::Quit),
            _ => None,
        }
    }
}

/// One output line
#[derive(Debug, Serialize)]
pub struct AgentFrame<'a> {
    pub reward: u32,
    pub game_over: bool,
    pub score: u32,
    /// Observation rows
    pub observation: Vec<&'a [u8]>,
}

impl<'a> AgentFrame<'a> {
    pub fn new(reward: u32, game_over: bool, score: u32, observation: &'a Observation) -> Self {
        Self {
            reward,
            game_over,
            score,
            observation: observation.cells.chunks(observation.cols.max(1)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentOptions {
    /// Also write the text render to the diagnostic stream after each frame
    pub text: bool,
}

/// Totals reported when the loop ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgentSummary {
    pub episodes: u32,
    pub commands: u64,
    pub final_score: u32,
}

/// Drive `game` from `input` until `q` or end of input
pub fn run<S, R, W, E>(
    game: &mut Tetris<S>,
    input: R,
    mut out: W,
    mut diag: E,
    options: AgentOptions,
) -> Result<AgentSummary>
where
    S: PieceSource,
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = AgentSummary::default();

    let obs = game.reset();
    summary.episodes += 1;
    emit(game, &obs, 0, false, &mut out, &mut diag, options)?;

    'lines: for line in input.lines() {
        let line = line.context("failed to read agent input")?;
        for command in line.chars().filter_map(AgentCommand::from_char) {
            summary.commands += 1;
            debug!("agent command {:?}", command);
            match command {
                AgentCommand::Quit => break 'lines,
                AgentCommand::Reset => {
                    let obs = game.reset();
                    summary.episodes += 1;
                    emit(game, &obs, 0, false, &mut out, &mut diag, options)?;
                }
                AgentCommand::Step(code) => {
                    let result = game.step_code(code);
                    emit(
                        game,
                        &result.observation,
                        result.reward,
                        result.game_over,
                        &mut out,
                        &mut diag,
                        options,
                    )?;
                }
            }
        }
    }

    summary.final_score = game.get_score();
    info!(
        "agent loop finished: {} episodes, {} commands, final score {}",
        summary.episodes, summary.commands, summary.final_score
    );
    Ok(summary)
}

fn emit<S: PieceSource>(
    game: &Tetris<S>,
    observation: &Observation,
    reward: u32,
    game_over: bool,
    out: &mut impl Write,
    diag: &mut impl Write,
    options: AgentOptions,
) -> Result<()> {
    let frame = AgentFrame::new(reward, game_over, game.get_score(), observation);
    serde_json::to_writer(&mut *out, &frame).context("failed to encode frame")?;
    out.write_all(b"\n")?;
    out.flush()?;

    if options.text {
        if let Render::Text(text) = game.render(RenderMode::Text) {
            writeln!(diag, "{}\n", text)?;
        }
    }
    Ok(())
}
