//! Text frontend capabilities.
//!
//! The engine only talks to the player through these traits: [`Menu`] to
//! offer numbered options and read a validated pick, [`TextOutput`] to print
//! lines. [`ConsoleUi`] drives a real terminal, [`ScriptedUi`] replays picks
//! for tests.

pub mod console;
pub mod scripted;

pub use console::ConsoleUi;
pub use scripted::ScriptedUi;

/// Cosmetic styling hint for a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Good,
    Bad,
    Critical,
    Gold,
}

pub trait Menu {
    /// Shows a prompt followed by numbered options starting at 1.
    fn present_options(&mut self, prompt: &str, options: &[String]);

    /// Reads an integer in `[min, max]`. Invalid or non-numeric input is
    /// re-prompted; this never fails.
    fn read_choice(&mut self, min: usize, max: usize) -> usize;

    /// Reads a free-form line of text.
    fn read_text(&mut self, prompt: &str) -> String;

    /// True once input has ended. Choices read after that are placeholders
    /// and callers should wind down instead of acting on them.
    fn is_closed(&self) -> bool {
        false
    }

    /// Presents options and returns the zero-based index of the pick.
    fn choose(&mut self, prompt: &str, options: &[String]) -> usize {
        self.present_options(prompt, options);
        self.read_choice(1, options.len().max(1)) - 1
    }
}

pub trait TextOutput {
    fn line(&mut self, tone: Tone, text: &str);

    fn say(&mut self, text: &str) {
        self.line(Tone::Plain, text);
    }
}

/// Everything the campaign needs from a frontend.
pub trait Frontend: Menu + TextOutput {}

impl<T: Menu + TextOutput> Frontend for T {}

/// Turns string literals into menu labels.
pub fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
