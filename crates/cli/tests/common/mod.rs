use std::collections::VecDeque;

use struggle_cli::presentation::{Presenter, Tone};
use struggle_cli::prompts::Prompter;
use struggle_core::error::Result;

/// Answers prompts from a fixed script. Running out of answers counts as a
/// cancellation, like end of input on a pipe.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Keeps every emitted line for later assertions.
#[derive(Default)]
pub struct RecordingPresenter {
    pub lines: Vec<(Tone, String)>,
}

impl RecordingPresenter {
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|(_, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|(_, line)| line.contains(needle))
    }
}

impl Presenter for RecordingPresenter {
    fn emit(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.lines.push((tone, text.to_string()));
        Ok(())
    }
}
