//! Console input and output helpers.

use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::thread;

use log::warn;

use crate::error::InputError;
use crate::input::InputProvider;

/// Reads answers from a line-based reader and writes prompts to a writer.
///
/// Non-numeric and out-of-range answers are rejected with a message and the
/// question is asked again, without limit.
///
/// ```
/// use rummyrs::InputProvider;
/// use rummyrs::console::ConsoleInput;
///
/// let mut input = ConsoleInput::new(&b"abc\n9\n2\n"[..], Vec::<u8>::new());
/// assert_eq!(input.request_integer("Pick: ", 1, 3), Ok(2));
/// ```
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Creates a provider over standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Creates a provider over the given reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the provider, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        self.write(prompt)?;
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => Ok(line.trim().to_owned()),
            Err(err) => {
                warn!("Failed to read input: {err}");
                Err(InputError::Closed)
            }
        }
    }

    fn write(&mut self, text: &str) -> Result<(), InputError> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|err| {
                warn!("Failed to write output: {err}");
                InputError::Closed
            })
    }

    /// Asks until the answer is a single alphabetic word.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] if the reader is exhausted.
    pub fn request_word(&mut self, prompt: &str) -> Result<String, InputError> {
        let mut answer = self.ask(prompt)?;
        while answer.is_empty() || !answer.chars().all(char::is_alphabetic) {
            answer = self.ask(
                "That is an invalid input. Be sure to enter a string (No numerical values). Please try again\n> ",
            )?;
        }
        Ok(answer)
    }

    /// Waits for the player to press enter.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Closed`] if the reader is exhausted.
    pub fn pause(&mut self) -> Result<(), InputError> {
        self.ask("Press enter to continue ").map(drop)
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn request_integer(&mut self, prompt: &str, lower: u32, upper: u32) -> Result<u32, InputError> {
        let mut answer = self.ask(prompt)?;
        loop {
            match answer.parse::<u32>() {
                Ok(value) if (lower..=upper).contains(&value) => return Ok(value),
                Ok(_) => {
                    answer = self.ask("Please enter one of the numbers listed above. Please try again: ")?;
                }
                Err(_) => {
                    answer = self.ask("Please enter a number. Please try again: ")?;
                }
            }
        }
    }

    fn notify(&mut self, message: &str) {
        let _ = self.write(message).and_then(|()| self.write("\n"));
    }
}

/// Writes `text` one character at a time, pausing `delay` after each.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn slow_type<W: Write>(writer: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    let mut buf = [0; 4];
    for ch in text.chars() {
        writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        writer.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

/// Pushes previous output off screen by writing `lines` blank lines.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn clear<W: Write>(writer: &mut W, lines: usize) -> io::Result<()> {
    writer.write_all("\n".repeat(lines).as_bytes())?;
    writer.flush()
}
