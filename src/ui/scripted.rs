//! Frontend that replays a fixed list of choices and records everything shown.

use std::collections::VecDeque;

use super::{Menu, TextOutput, Tone};

#[derive(Debug, Clone)]
pub struct ScriptedUi {
    choices: VecDeque<usize>,
    texts: VecDeque<String>,
    default_choice: usize,
    prompts: Vec<String>,
    transcript: Vec<String>,
    rejected: usize,
    close_when_done: bool,
    closed: bool,
}

impl Default for ScriptedUi {
    fn default() -> Self {
        Self::new([])
    }
}

impl ScriptedUi {
    /// Replays `choices` (1-based, as a player would type them). Once they
    /// run out every menu gets option 1.
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            texts: VecDeque::new(),
            default_choice: 1,
            prompts: Vec::new(),
            transcript: Vec::new(),
            rejected: 0,
            close_when_done: false,
            closed: false,
        }
    }

    /// Choice used once the script is exhausted (clamped to each menu's range).
    pub fn with_default(mut self, choice: usize) -> Self {
        self.default_choice = choice;
        self
    }

    pub fn with_texts<S: Into<String>>(mut self, texts: impl IntoIterator<Item = S>) -> Self {
        self.texts = texts.into_iter().map(Into::into).collect();
        self
    }

    /// Treats the end of the script as end of input.
    pub fn closing(mut self) -> Self {
        self.close_when_done = true;
        self
    }

    /// Every menu prompt presented, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every line of output, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether any output line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Scripted choices that were out of range and re-prompted.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

impl TextOutput for ScriptedUi {
    fn line(&mut self, _tone: Tone, text: &str) {
        self.transcript.push(text.to_string());
    }
}

impl Menu for ScriptedUi {
    fn present_options(&mut self, prompt: &str, options: &[String]) {
        self.prompts.push(prompt.to_string());
        for (i, option) in options.iter().enumerate() {
            self.transcript.push(format!("  {}. {}", i + 1, option));
        }
    }

    fn read_choice(&mut self, min: usize, max: usize) -> usize {
        while let Some(choice) = self.choices.pop_front() {
            if (min..=max).contains(&choice) {
                return choice;
            }
            self.rejected += 1;
        }
        if self.close_when_done {
            self.closed = true;
            return max;
        }
        self.default_choice.clamp(min, max)
    }

    fn read_text(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        self.texts.pop_front().unwrap_or_default()
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
