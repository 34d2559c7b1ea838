use struggle_core::error::Result;
use struggle_core::insights::{InsightOption, Insights};

use super::{Session, EMPTY_STORE_MESSAGE};
use crate::presentation::table::insight_table;

/// Prints status counts and percentages for the statuses selected by `option`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn run(session: &mut Session<'_>, option: InsightOption) -> Result<()> {
    let insights = Insights::from_records(&session.store.load_or_empty()?);
    if insights.is_empty() {
        return session.presenter.plain(EMPTY_STORE_MESSAGE);
    }

    session
        .presenter
        .heading(&format!("\n{}\n", option.heading()))?;
    session
        .presenter
        .table(&insight_table(&insights.shares(option)))
}
