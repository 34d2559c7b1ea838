//! Console output for struggle.
//!
//! Handlers never write to the terminal directly. They hand lines tagged with
//! a [`Tone`] to a [`Presenter`], which decides how each tone looks. The
//! terminal presenter maps tones to colors; tests record plain text.

pub mod colors;
pub mod table;
pub mod terminal;

pub use table::TableLine;
pub use terminal::TerminalPresenter;

use struggle_core::error::Result;
use struggle_core::record::Status;

/// Banner printed at the start of every run.
pub const TITLE: &str = r"
 __
/\ \__
\ \ ,_\   ____
 \ \ \/  /',__\
  \ \ \_/\__, `\
   \ \__\/\____/
    \/__/\/___/
";

/// How a line of output should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Error,
    /// A record row, colored by its application status.
    Status(Status),
}

/// Sink for everything the handlers show to the user.
pub trait Presenter {
    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output could not be written.
    fn emit(&mut self, tone: Tone, text: &str) -> Result<()>;

    fn plain(&mut self, text: &str) -> Result<()> {
        self.emit(Tone::Plain, text)
    }

    fn heading(&mut self, text: &str) -> Result<()> {
        self.emit(Tone::Heading, text)
    }

    fn success(&mut self, text: &str) -> Result<()> {
        self.emit(Tone::Success, text)
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        self.emit(Tone::Warning, text)
    }

    fn error(&mut self, text: &str) -> Result<()> {
        self.emit(Tone::Error, text)
    }

    fn title(&mut self) -> Result<()> {
        self.emit(Tone::Error, TITLE)
    }

    fn table(&mut self, lines: &[TableLine]) -> Result<()> {
        for line in lines {
            self.emit(line.tone, &line.text)?;
        }
        Ok(())
    }
}
