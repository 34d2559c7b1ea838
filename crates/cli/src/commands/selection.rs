use itertools::Itertools;
use log::debug;
use struggle_core::error::{Error, Result};
use struggle_core::record::Record;
use struggle_core::search::{find_matches, suggest_companies, Match};

use super::Session;
use crate::presentation::table::record_table;
use crate::prompts::prompt_selection;

/// Loads every record for a search. An empty store is reported as such,
/// since there is nothing to update or delete.
pub(super) fn load_for_search(session: &Session<'_>) -> Result<Vec<Record>> {
    let records = session.store.load_or_empty()?;
    if records.is_empty() {
        return Err(Error::EmptyStore);
    }

    Ok(records)
}

/// Lists the records matching `fragment` and lets the user pick one.
///
/// With no matches, prints fuzzy suggestions and fails with
/// [`Error::NoMatches`] without prompting.
pub(super) fn select_match(
    session: &mut Session<'_>,
    fragment: &str,
    records: &[Record],
    verb: &str,
) -> Result<Match> {
    let mut matches = find_matches(fragment, records);
    debug!("{} records match \"{fragment}\"", matches.len());

    if matches.is_empty() {
        let suggestions = suggest_companies(fragment, records);
        if !suggestions.is_empty() {
            session
                .presenter
                .plain(&format!("Did you mean: {}?", suggestions.join(", ")))?;
        }
        return Err(Error::NoMatches(fragment.to_string()));
    }

    session.presenter.heading("\nEXISTING JOB LISTINGS\n")?;
    let listed = matches.iter().map(|found| &found.record).collect_vec();
    session.presenter.table(&record_table(&listed, true))?;

    let index =
        prompt_selection(session.prompter, session.presenter, matches.len(), verb)?.into_result()?;

    Ok(matches.swap_remove(index))
}
