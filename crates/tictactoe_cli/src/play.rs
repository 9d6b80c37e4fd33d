//! Interactive and scripted game loops.

use crate::presenter::TerminalPresenter;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_core::{Game, Position, RoundOutcome};
use tracing::{debug, info, instrument};

/// What a line of interactive input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Move(Position),
    Reset,
    Quit,
    Blank,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" => Input::Blank,
            "r" | "reset" | "restart" => Input::Reset,
            "q" | "quit" | "exit" => Input::Quit,
            other => Position::parse(other).map_or(Input::Unknown, Input::Move),
        }
    }
}

fn show<W: Write>(game: &mut Game<TerminalPresenter<W>>) {
    let snapshot = game.snapshot();
    let board = game.board().clone();
    game.presenter_mut().show_board(&board, &snapshot);
}

/// Runs a game reading one command per line from `input`.
///
/// Moves are entered as an index (0-8) or a position label. Moves sent
/// after the game has ended are refused until the game is reset.
#[instrument(skip_all)]
pub fn run_interactive<R, W>(input: R, game: &mut Game<TerminalPresenter<W>>) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Starting interactive game");
    show(game);
    let greeting = RoundOutcome::NextTurn(game.session().current_mark()).to_string();
    game.presenter_mut().say(&greeting);
    game.presenter_mut().prompt();

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = Input::parse(&line);
        debug!(?command, "Read command");

        match command {
            Input::Quit => break,
            Input::Blank => {}
            Input::Reset => {
                game.reset();
                show(game);
            }
            Input::Unknown => game
                .presenter_mut()
                .say("Enter a position (0-8 or a name like `center`), `r` to restart or `q` to quit."),
            Input::Move(_) if game.is_over() => game
                .presenter_mut()
                .say("The game is over. Enter `r` to play again."),
            Input::Move(position) => match game.play_round(position.to_index()) {
                Ok(_) => show(game),
                Err(err) => game.presenter_mut().say(&format!("{position}: {err}")),
            },
        }

        game.presenter_mut().finish()?;
        game.presenter_mut().prompt();
    }

    game.presenter_mut().finish()?;
    Ok(())
}

/// Plays `moves` in order and shows the final board.
///
/// # Errors
///
/// Fails on the first move that cannot be parsed or is refused.
#[instrument(skip(game))]
pub fn run_replay<W: Write>(moves: &[String], game: &mut Game<TerminalPresenter<W>>) -> Result<()> {
    for (number, raw) in moves.iter().enumerate() {
        let position = Position::parse(raw)
            .with_context(|| format!("Move {}: `{raw}` is not a board position", number + 1))?;
        if let Err(err) = game.play_round(position.to_index()) {
            game.presenter_mut().finish()?;
            bail!("Move {} ({position}) refused: {err}", number + 1);
        }
    }

    show(game);
    game.presenter_mut().finish()?;
    Ok(())
}
