//! Terminal presentation of round outcomes.

use serde_json::json;
use std::io::{self, Write};
use tictactoe_core::{Board, GameSnapshot, Presenter, RoundOutcome};
use tracing::warn;

/// How outcomes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable messages and ASCII board.
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes every outcome to a terminal (or any writer).
///
/// [`Presenter::present`] cannot fail, so the first write error is held
/// until [`TerminalPresenter::finish`] is called.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    format: Format,
    error: Option<io::Error>,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W, format: Format) -> Self {
        Self {
            out,
            format,
            error: None,
        }
    }

    /// Writes the board (text) or a snapshot (JSON).
    pub fn show_board(&mut self, board: &Board, snapshot: &GameSnapshot) {
        let result = match self.format {
            Format::Text => writeln!(self.out, "{board}\n"),
            Format::Json => writeln!(self.out, "{}", json!({ "snapshot": snapshot })),
        };
        self.record(result);
    }

    /// Writes a free-form line (text mode only).
    pub fn say(&mut self, line: &str) {
        if self.format == Format::Text {
            let result = writeln!(self.out, "{line}");
            self.record(result);
        }
    }

    /// Writes an input prompt (text mode only).
    pub fn prompt(&mut self) {
        if self.format == Format::Text {
            let result = write!(self.out, "> ").and_then(|()| self.out.flush());
            self.record(result);
        }
    }

    /// Flushes output and returns the first write error, if any.
    pub fn finish(&mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, result: io::Result<()>) {
        if let Err(err) = result {
            warn!(error = %err, "Failed to write to terminal");
            self.error.get_or_insert(err);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, outcome: &RoundOutcome) {
        let result = match self.format {
            Format::Text => writeln!(self.out, "{outcome}"),
            Format::Json => writeln!(
                self.out,
                "{}",
                json!({ "outcome": outcome, "message": outcome.to_string() })
            ),
        };
        self.record(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Game, Mark};

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_text_messages() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Format::Text);
        presenter.present(&RoundOutcome::NextTurn(Mark::O));
        presenter.present(&RoundOutcome::Draw);
        presenter.finish().unwrap();
        assert_eq!(output(presenter), "Player O's turn\nIt's a draw!\n");
    }

    #[test]
    fn test_json_lines() {
        let mut game = Game::with_presenter(TerminalPresenter::new(Vec::new(), Format::Json));
        game.play_round(4).unwrap();

        let text = output(game.into_presenter());
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["outcome"], json!({ "next_turn": "O" }));
        assert_eq!(value["message"], "Player O's turn");
    }

    #[test]
    fn test_prompt_and_say_silent_in_json() {
        let mut presenter = TerminalPresenter::new(Vec::new(), Format::Json);
        presenter.prompt();
        presenter.say("hello");
        assert!(output(presenter).is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_surfaces_on_finish() {
        let mut presenter = TerminalPresenter::new(BrokenPipe, Format::Text);
        presenter.present(&RoundOutcome::Draw);
        let err = presenter.finish().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(presenter.finish().is_ok());
    }
}
