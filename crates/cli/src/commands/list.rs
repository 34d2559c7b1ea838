use struggle_core::error::Result;
use struggle_core::ordering::{sort_records, SortKey};

use super::{Session, EMPTY_STORE_MESSAGE};
use crate::presentation::table::record_table;

/// Prints every application ordered by `sort_key`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run(session: &mut Session<'_>, sort_key: SortKey) -> Result<()> {
    let records = session.store.load_or_empty()?;
    if records.is_empty() {
        return session.presenter.plain(EMPTY_STORE_MESSAGE);
    }

    session
        .presenter
        .heading(&format!("\n{}\n", sort_key.heading()))?;
    session
        .presenter
        .table(&record_table(&sort_records(&records, sort_key), false))
}
