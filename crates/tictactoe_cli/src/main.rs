//! Tic-tac-toe terminal front end.
//!
//! Composition root: builds one [`Game`] wired to a terminal presenter and
//! drives it from stdin or from a scripted move list.

#![warn(missing_docs)]

mod cli;
mod play;
mod presenter;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use presenter::{Format, TerminalPresenter};
use tictactoe_core::Game;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

#[instrument]
fn run(cli: Cli) -> Result<()> {
    let format = if cli.json { Format::Json } else { Format::Text };
    let stdout = std::io::stdout().lock();
    let mut game = Game::with_presenter(TerminalPresenter::new(stdout, format));

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = std::io::stdin().lock();
            play::run_interactive(stdin, &mut game)?;
        }
        Command::Replay { moves } => play::run_replay(&moves, &mut game)?,
    }

    info!(over = game.is_over(), turn = game.session().turn(), "Session finished");
    Ok(())
}
