use log::info;
use struggle_core::error::{Error, Result};
use struggle_core::store::remove_at;

use super::selection::{load_for_search, select_match};
use super::Session;
use crate::presentation::table::record_table;
use crate::prompts::{confirm, Confirmation};

/// Interactively removes an application found by `fragment`.
///
/// # Errors
///
/// Returns [`Error::EmptyStore`] or [`Error::NoMatches`] when there is nothing
/// to delete, [`Error::Aborted`] if the user declines, [`Error::Interrupted`]
/// if input is cancelled, or a store error.
pub fn run(session: &mut Session<'_>, fragment: &str) -> Result<()> {
    let mut records = load_for_search(session)?;
    let selected = select_match(session, fragment, &records, "delete")?;

    session.presenter.heading(&format!(
        "\nDeleting {} listing at {}\n",
        selected.record.title, selected.record.company
    ))?;
    session
        .presenter
        .table(&record_table(&[&selected.record], false))?;

    match confirm(session.prompter, session.presenter)?.into_result()? {
        Confirmation::Yes => {
            info!("Deleting record {} ({})", selected.position, selected.record);
            remove_at(&mut records, selected.position)?;
            session.store.rewrite(&records)?;
            session.presenter.error("DELETED LISTING.")
        }
        Confirmation::No => Err(Error::Aborted),
    }
}
