use log::info;
use struggle_core::error::{Error, Result};
use struggle_core::record::Record;

use super::Session;
use crate::presentation::table::record_table;
use crate::prompts::{confirm, prompt_notes, prompt_status, prompt_title, Confirmation};

/// Interactively adds a new application at `company`.
///
/// Asks for the title, status and notes, previews the record and appends it
/// once the user confirms.
///
/// # Errors
///
/// Returns [`Error::EmptyCompany`] for a blank company, [`Error::Aborted`] if
/// the user declines, [`Error::Interrupted`] if input is cancelled, or a store
/// error.
pub fn run(session: &mut Session<'_>, company: &str) -> Result<()> {
    let company = company.trim();
    if company.is_empty() {
        return Err(Error::EmptyCompany);
    }

    let title = prompt_title(session.prompter, session.presenter, company)?.into_result()?;
    let status = prompt_status(session.prompter, session.presenter)?.into_result()?;
    let notes = prompt_notes(session.prompter, session.presenter)?.into_result()?;

    let record = Record::new(company, &title, status, &notes);

    session.presenter.plain("")?;
    session.presenter.table(&record_table(&[&record], false))?;

    match confirm(session.prompter, session.presenter)?.into_result()? {
        Confirmation::Yes => {
            info!("Adding {record}");
            session.store.append(&record)?;
            session.presenter.success("ADDED NEW LISTING.")
        }
        Confirmation::No => Err(Error::Aborted),
    }
}
