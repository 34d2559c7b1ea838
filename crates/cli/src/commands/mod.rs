//! Command handlers.
//!
//! Each handler performs one user-requested action against the [`Session`]:
//! it loads records from the store, talks to the user through the prompter,
//! persists changes and reports through the presenter.

pub mod add;
pub mod delete;
pub mod insights;
pub mod list;
mod selection;
pub mod update;

use log::debug;
use struggle_core::error::{Error, Result};
use struggle_core::insights::InsightOption;
use struggle_core::ordering::SortKey;
use struggle_core::store::Store;

use crate::presentation::Presenter;
use crate::prompts::Prompter;

/// Exit status of a run cancelled with Ctrl-C or end of input.
pub const INTERRUPTED_EXIT_STATUS: u8 = 130;

/// Message shown when the user stops a run.
pub const EXITING_MESSAGE: &str = "\nEXITING.\n";

/// Message shown when there is nothing to list or summarize.
pub const EMPTY_STORE_MESSAGE: &str = "No job applications have been tracked yet.";

/// The collaborators every handler works with.
pub struct Session<'a> {
    pub store: &'a mut dyn Store,
    pub prompter: &'a mut dyn Prompter,
    pub presenter: &'a mut dyn Presenter,
}

/// One requested action, as parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Update(String),
    Delete(String),
    List(SortKey),
    Insights(InsightOption),
}

/// Runs a single action.
///
/// # Errors
///
/// Returns an error if the action was aborted, interrupted, found nothing to
/// act on, or the store failed.
pub fn run(session: &mut Session<'_>, action: &Action) -> Result<()> {
    debug!("Running {action:?}");

    match action {
        Action::Add(company) => add::run(session, company),
        Action::Update(fragment) => update::run(session, fragment),
        Action::Delete(fragment) => delete::run(session, fragment),
        Action::List(sort_key) => list::run(session, *sort_key),
        Action::Insights(option) => insights::run(session, *option),
    }
}

/// Runs `actions` in order, stopping at the first one that fails.
///
/// # Errors
///
/// Returns the error of the first failing action.
pub fn run_all(session: &mut Session<'_>, actions: &[Action]) -> Result<()> {
    for action in actions {
        run(session, action)?;
    }

    Ok(())
}

/// Process exit status for the outcome of [`run_all`].
///
/// Success is 0, an interrupted prompt is 130 and every other failure,
/// including a declined confirmation, is 1.
#[must_use]
pub fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(Error::Interrupted) => INTERRUPTED_EXIT_STATUS,
        Err(_) => 1,
    }
}
