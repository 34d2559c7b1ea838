use log::info;
use struggle_core::error::{Error, Result};
use struggle_core::store::replace_at;

use super::selection::{load_for_search, select_match};
use super::Session;
use crate::presentation::table::record_table;
use crate::prompts::{confirm, prompt_field, prompt_field_update, Confirmation};

/// Interactively changes one field of an application found by `fragment`.
///
/// The updated record is written back at its original position; every other
/// record is left untouched.
///
/// # Errors
///
/// Returns [`Error::EmptyStore`] or [`Error::NoMatches`] when there is nothing
/// to update, [`Error::Aborted`] if the user declines, [`Error::Interrupted`]
/// if input is cancelled, or a store error.
pub fn run(session: &mut Session<'_>, fragment: &str) -> Result<()> {
    let mut records = load_for_search(session)?;
    let selected = select_match(session, fragment, &records, "update")?;

    session.presenter.heading(&format!(
        "\nUpdating {} listing at {}\n",
        selected.record.title, selected.record.company
    ))?;

    let field = prompt_field(session.prompter, session.presenter)?.into_result()?;
    let change =
        prompt_field_update(session.prompter, session.presenter, field)?.into_result()?;
    let updated = change.apply(&selected.record);

    session.presenter.heading("\nBEFORE")?;
    session
        .presenter
        .table(&record_table(&[&selected.record], false))?;
    session.presenter.heading("\nAFTER")?;
    session.presenter.table(&record_table(&[&updated], false))?;

    match confirm(session.prompter, session.presenter)?.into_result()? {
        Confirmation::Yes => {
            info!(
                "Updating {} of record {} ({})",
                field.label(),
                selected.position,
                selected.record
            );
            replace_at(&mut records, selected.position, updated)?;
            session.store.rewrite(&records)?;
            session.presenter.success("UPDATED LISTING.")
        }
        Confirmation::No => Err(Error::Aborted),
    }
}
