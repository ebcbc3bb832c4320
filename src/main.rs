//! Falling-block puzzle runner (default binary).
//!
//! `play` (the default) runs the interactive terminal game; `agent` drives the
//! engine from stdin and reports JSON frames on stdout.

mod play;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use tetris_env::agent::{self, AgentOptions};
use tetris_env::core::config::parse_horizon;
use tetris_env::core::{EngineConfig, ObservationMode, Tetris};
use tetris_env::logging::init_file_logger;
use tetris_env::term::TerminalRenderer;
use tetris_env::types::DEFAULT_DROP_INTERVAL_MS;

#[derive(Parser, Debug)]
#[command(name = "tetris-env", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Seed for the piece source (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Step limit per episode; `none` for no limit
    #[arg(long, global = true, value_name = "N|none")]
    horizon: Option<String>,

    /// Number of upcoming pieces in the queue (at least 1)
    #[arg(long, global = true, value_name = "N")]
    queue: Option<usize>,

    /// Observation layout: panels | flat
    #[arg(long, global = true)]
    observation: Option<String>,

    /// Append log records to this file (logging is off without it)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Minimum level written to the log file
    #[arg(long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive terminal game
    Play {
        /// Auto-drop interval in milliseconds
        #[arg(long, default_value_t = DEFAULT_DROP_INTERVAL_MS as u64)]
        drop_interval_ms: u64,
    },
    /// Read action codes from stdin, write JSON frames to stdout
    Agent {
        /// Also print the text render to stderr after each frame
        #[arg(long)]
        text: bool,
    },
}

impl Cli {
    /// Environment configuration with command-line overrides applied
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = EngineConfig::from_env();
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(raw) = &self.horizon {
            match parse_horizon(raw) {
                Some(horizon) => config = config.with_horizon(horizon),
                None => bail!("invalid --horizon {:?}: expected a step count or `none`", raw),
            }
        }
        if let Some(queue) = self.queue {
            if queue == 0 {
                bail!("--queue must be at least 1");
            }
            config = config.with_next_queue_size(queue);
        }
        if let Some(raw) = &self.observation {
            match ObservationMode::from_str(raw) {
                Some(mode) => config = config.with_observation(mode),
                None => bail!("invalid --observation {:?}: expected `panels` or `flat`", raw),
            }
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logger(path, cli.log_level)?;
    }

    let config = cli.engine_config()?;
    let mut game = Tetris::new(config);
    info!("engine seed {} config {:?}", game.seed(), config);

    match cli.command.unwrap_or(Command::Play {
        drop_interval_ms: DEFAULT_DROP_INTERVAL_MS as u64,
    }) {
        Command::Play { drop_interval_ms } => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = play::run(&mut term, &mut game, Duration::from_millis(drop_interval_ms));

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
        Command::Agent { text } => {
            let stdin = io::stdin();
            let summary = agent::run(
                &mut game,
                stdin.lock(),
                io::stdout().lock(),
                io::stderr().lock(),
                AgentOptions { text },
            )?;
            info!("{:?}", summary);
            Ok(())
        }
    }
}
