//! Line-oriented terminal frontend with crossterm colours.

use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

use super::{Menu, TextOutput, Tone};

/// Reads choices from any `BufRead` and writes to any `Write`.
///
/// When input reaches end-of-file the frontend reports itself closed and every
/// further choice resolves to the highest option.
pub struct ConsoleUi<R, W> {
    input: R,
    output: W,
    color: bool,
    closed: bool,
}

impl ConsoleUi<io::StdinLock<'static>, io::Stdout> {
    /// Frontend bound to the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
            closed: false,
        }
    }

    /// Disables ANSI styling.
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Option<String> {
        if self.closed {
            return None;
        }
        let _ = self.output.flush();
        let mut buf = String::new();
        match self.input.read_line(&mut buf) {
            Ok(0) | Err(_) => {
                self.closed = true;
                None
            }
            Ok(_) => Some(buf.trim().to_string()),
        }
    }

    fn write_line(&mut self, text: &str) {
        // Display is best effort; a closed pipe is not a game error.
        let _ = writeln!(self.output, "{}", text);
    }
}

impl<R: BufRead, W: Write> TextOutput for ConsoleUi<R, W> {
    fn line(&mut self, tone: Tone, text: &str) {
        if !self.color {
            self.write_line(text);
            return;
        }
        let styled = match tone {
            Tone::Plain => text.to_string(),
            Tone::Title => text.bold().cyan().to_string(),
            Tone::Good => text.green().to_string(),
            Tone::Bad => text.red().to_string(),
            Tone::Critical => text.bold().red().to_string(),
            Tone::Gold => text.yellow().to_string(),
        };
        self.write_line(&styled);
    }
}

impl<R: BufRead, W: Write> Menu for ConsoleUi<R, W> {
    fn present_options(&mut self, prompt: &str, options: &[String]) {
        self.write_line("");
        self.line(Tone::Title, prompt);
        for (i, option) in options.iter().enumerate() {
            self.write_line(&format!("  {}. {}", i + 1, option));
        }
    }

    fn read_choice(&mut self, min: usize, max: usize) -> usize {
        loop {
            let _ = write!(self.output, "> ");
            let Some(input) = self.read_line() else {
                return max;
            };
            match input.parse::<usize>() {
                Ok(n) if (min..=max).contains(&n) => return n,
                _ => self.line(
                    Tone::Bad,
                    &format!("Please enter a number between {} and {}.", min, max),
                ),
            }
        }
    }

    fn read_text(&mut self, prompt: &str) -> String {
        let _ = write!(self.output, "{} ", prompt);
        self.read_line().unwrap_or_default()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
