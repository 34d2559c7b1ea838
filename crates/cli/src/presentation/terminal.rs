use std::io::{stdout, Stdout, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use struggle_core::config::Config;
use struggle_core::error::Result;

use super::colors::AsTermColor;
use super::{Presenter, Tone};

/// Writes to stdout, styling each tone unless color is turned off.
pub struct TerminalPresenter {
    stdout: Stdout,
    color: bool,
}

impl TerminalPresenter {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            stdout: stdout(),
            color: config.color,
        }
    }
}

impl Presenter for TerminalPresenter {
    fn emit(&mut self, tone: Tone, text: &str) -> Result<()> {
        if !self.color {
            writeln!(self.stdout, "{text}")?;
            return Ok(());
        }

        if tone.is_bold() {
            queue!(self.stdout, SetAttribute(Attribute::Bold))?;
        }

        if let Some(color) = tone.as_crossterm_color() {
            queue!(self.stdout, SetForegroundColor(color))?;
        }

        queue!(
            self.stdout,
            Print(text),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n"),
        )?;

        self.stdout.flush()?;
        Ok(())
    }
}
