//! Line prompts for the interactive switch.
//!
//! A prompt is a fallible read: it yields an answer or a cancellation, never
//! a signal. On a terminal `inquire` drives the prompt (Ctrl-C and Esc cancel);
//! on a pipe a single line is read and end of input counts as cancellation.

use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use std::io::{BufRead, IsTerminal, Write};

/// Outcome of asking the user for one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(String),
    Cancelled,
}

/// Source of single-line answers
pub trait LinePrompt {
    fn ask(&mut self, message: &str) -> Result<Reply>;
}

/// Prompt on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl LinePrompt for TerminalPrompt {
    fn ask(&mut self, message: &str) -> Result<Reply> {
        match Text::new(message).prompt() {
            Ok(answer) => Ok(Reply::Answer(answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(Reply::Cancelled)
            }
            Err(e) => Err(e).context("Failed to read selection"),
        }
    }
}

/// Prompt over any buffered reader, one line per question.
///
/// The question is written without a trailing newline so the answer is typed
/// on the same line.
#[derive(Debug)]
pub struct ReaderPrompt<R, W = anstream::Stdout> {
    reader: R,
    output: W,
}

impl<R: BufRead> ReaderPrompt<R> {
    pub fn new(reader: R) -> Self {
        Self::with_output(reader, anstream::stdout())
    }
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn with_output(reader: R, output: W) -> Self {
        Self { reader, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> LinePrompt for ReaderPrompt<R, W> {
    fn ask(&mut self, message: &str) -> Result<Reply> {
        write!(self.output, "{message} ").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read selection from stdin")?;

        if read == 0 {
            return Ok(Reply::Cancelled);
        }
        Ok(Reply::Answer(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// The prompt matching how stdin is attached
pub fn stdin_prompt() -> Box<dyn LinePrompt> {
    if std::io::stdin().is_terminal() {
        Box::new(TerminalPrompt)
    } else {
        tracing::debug!("stdin is not a terminal, reading selection as a plain line");
        Box::new(ReaderPrompt::new(std::io::stdin().lock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reader_prompt_answer() {
        let mut prompt = ReaderPrompt::new(Cursor::new("alice\nbob\n"));
        assert_eq!(prompt.ask("?").unwrap(), Reply::Answer("alice".into()));
        assert_eq!(prompt.ask("?").unwrap(), Reply::Answer("bob".into()));
    }

    #[test]
    fn test_reader_prompt_keeps_cursor_on_question_line() {
        let mut prompt = ReaderPrompt::with_output(Cursor::new("1\n"), Vec::new());
        prompt.ask("Select profile (number or name):").unwrap();
        let written = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(written, "Select profile (number or name): ");
    }

    #[test]
    fn test_reader_prompt_crlf() {
        let mut prompt = ReaderPrompt::new(Cursor::new("2\r\n"));
        assert_eq!(prompt.ask("?").unwrap(), Reply::Answer("2".into()));
    }

    #[test]
    fn test_reader_prompt_eof_cancels() {
        let mut prompt = ReaderPrompt::new(Cursor::new(""));
        assert_eq!(prompt.ask("?").unwrap(), Reply::Cancelled);
    }

    #[test]
    fn test_reader_prompt_empty_line_is_answer() {
        let mut prompt = ReaderPrompt::new(Cursor::new("\n"));
        assert_eq!(prompt.ask("?").unwrap(), Reply::Answer(String::new()));
    }
}
