//! Line-oriented textual interface
//!
//! Prints messages and asks numeric questions, retrying bad answers a fixed
//! number of times. Generic over its streams so games can be scripted in
//! tests with an in-memory reader and writer.

use std::io::{self, BufRead, Write};

use crate::board::Board;
use crate::error::InputError;

/// Number of blank lines printed by [`Console::clear`]
const CLEAR_LINES: usize = 100;

pub struct Console<R, W> {
    input: R,
    output: W,
    retries: u32,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console on the process's standard streams
    pub fn stdio(retries: u32) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), retries)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, retries: u32) -> Self {
        Self {
            input,
            output,
            retries,
        }
    }

    /// Failed attempts tolerated per question
    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` followed by a newline
    pub fn message(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Scroll previous output off screen
    pub fn clear(&mut self) -> Result<(), InputError> {
        write!(self.output, "{}", "\n".repeat(CLEAR_LINES))?;
        Ok(())
    }

    pub fn show_board(&mut self, board: &Board) -> Result<(), InputError> {
        write!(self.output, "{board}")?;
        Ok(())
    }

    /// Ask for an integer.
    ///
    /// Prints `text` and `prompt`, then reads one answer. With
    /// `max_answer = Some(max)` the answer must lie in `0..=max`; with `None`
    /// any integer is returned and range checks are left to the caller.
    /// Non-integer and out-of-range answers share one retry counter: after
    /// `retries` failures the next failure is fatal.
    pub fn dialogue(
        &mut self,
        text: &str,
        prompt: &str,
        max_answer: Option<i64>,
    ) -> Result<i64, InputError> {
        let mut failures = 0;

        loop {
            self.message(text)?;
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let Some(answer) = self.read_integer()? else {
                failures += 1;
                self.fail(failures, "invalid input - not an integer")?;
                self.message(&format!(
                    "Invalid input. Please enter a valid number. RETRY [{failures}/{}]",
                    self.retries
                ))?;
                continue;
            };

            match max_answer {
                Some(max) if !(0..=max).contains(&answer) => {
                    failures += 1;
                    self.fail(failures, "invalid input - selection out of range")?;
                    self.message(&format!(
                        "Invalid answer. Please select a valid answer from 1 to {max} or 0. RETRY [{failures}/{}]",
                        self.retries
                    ))?;
                }
                _ => return Ok(answer),
            }
        }
    }

    /// Error out once `failures` exceeds the retry budget
    pub(crate) fn fail(&self, failures: u32, reason: &'static str) -> Result<(), InputError> {
        if failures > self.retries {
            log::warn!("{reason}, giving up after {failures} attempts");
            return Err(InputError::RetriesExhausted {
                attempts: failures,
                reason,
            });
        }
        log::warn!("{reason} ({failures}/{})", self.retries);
        Ok(())
    }

    /// Read the next non-blank line and parse its first token.
    ///
    /// `Ok(None)` for a line that does not start with an integer. Anything
    /// after the first token is ignored.
    fn read_integer(&mut self) -> Result<Option<i64>, InputError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput);
            }
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.parse().ok());
            }
        }
    }
}
