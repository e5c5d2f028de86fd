//! Line-oriented console prompts.

use derive_more::Display;
use std::io::{BufRead, Write};
use strictly_tictactoe::PlayerError;
use tracing::{debug, instrument};

/// Error reading from or writing to the console.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleError {
    /// End of input.
    #[display("Input closed")]
    Closed,

    /// Underlying reader or writer failed.
    #[display("Console I/O failed: {message}")]
    Io {
        /// Underlying error message.
        message: String,
    },
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<ConsoleError> for PlayerError {
    fn from(err: ConsoleError) -> Self {
        match err {
            ConsoleError::Closed => PlayerError::InputClosed,
            ConsoleError::Io { message } => PlayerError::Io { message },
        }
    }
}

/// Prompting console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Parses one or more non-negative integers separated by spaces or commas.
pub fn parse_numbers(line: &str) -> Option<Vec<usize>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect::<Option<Vec<usize>>>()
        .filter(|numbers| !numbers.is_empty())
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning its reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes a line.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line.
    ///
    /// Bytes that are not valid UTF-8 become replacement characters, so such
    /// a line fails validation and is asked again like any other bad answer.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            debug!("End of input");
            return Err(ConsoleError::Closed);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Asks until the answer is a non-negative integer.
    pub fn ask_number(&mut self, prompt: &str) -> Result<usize, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse() {
                Ok(number) => return Ok(number),
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Asks a yes/no question. Only `y` or `yes`, in any case, is a yes.
    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        let answer = self.ask(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    /// Asks for a grid size until it is at least `min`.
    #[instrument(skip(self))]
    pub fn ask_grid_size(&mut self, min: usize) -> Result<usize, ConsoleError> {
        loop {
            let size = self.ask_number(&format!("Enter the grid size ({min} or more): "))?;
            if size >= min {
                return Ok(size);
            }
            self.say(format!("The grid size must be at least {min}."))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_numbers("1 2"), Some(vec![1, 2]));
        assert_eq!(parse_numbers(" 0,2 "), Some(vec![0, 2]));
        assert_eq!(parse_numbers("7"), Some(vec![7]));
        assert_eq!(parse_numbers(""), None);
        assert_eq!(parse_numbers("a 1"), None);
        assert_eq!(parse_numbers("-1"), None);
    }

    #[test]
    fn test_ask_number_retries_until_numeric() {
        let mut console = console("abc\n\n4\n");
        assert_eq!(console.ask_number("n? "), Ok(4));
        let out = written(&console);
        assert_eq!(out.matches("Please enter a valid number.").count(), 2);
        assert_eq!(out.matches("n? ").count(), 3);
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut console = console("");
        assert_eq!(console.ask("? "), Err(ConsoleError::Closed));
    }

    #[test]
    fn test_yes_no() {
        let mut console = console("Y\nYes\nn\nmaybe\n\nyolo\nyep\n");
        assert_eq!(console.ask_yes_no("? "), Ok(true));
        assert_eq!(console.ask_yes_no("? "), Ok(true));
        for _ in 0..5 {
            assert_eq!(console.ask_yes_no("? "), Ok(false));
        }
    }

    #[test]
    fn test_invalid_utf8_line_is_asked_again() {
        let mut console = Console::new(Cursor::new(b"\xff\n3\n".to_vec()), Vec::new());
        assert_eq!(console.ask_number("n? "), Ok(3));
        assert_eq!(
            written(&console)
                .matches("Please enter a valid number.")
                .count(),
            1
        );
    }

    #[test]
    fn test_grid_size_reprompts_below_minimum() {
        let mut console = console("2\n1\n5\n");
        assert_eq!(console.ask_grid_size(3), Ok(5));
        assert_eq!(
            written(&console)
                .matches("The grid size must be at least 3.")
                .count(),
            2
        );
    }

    #[test]
    fn test_closed_maps_to_player_error() {
        assert_eq!(PlayerError::from(ConsoleError::Closed), PlayerError::InputClosed);
    }
}
