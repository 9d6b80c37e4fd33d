//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print outcomes and the final board as JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively: one position per line, `r` to restart, `q` to quit
    Play,

    /// Play a scripted sequence of moves and print the result
    Replay {
        /// Positions as indices (0-8) or labels such as `center`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
