//! Locating records by company name.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;

use crate::record::Record;

/// Upper bound on "did you mean" suggestions.
pub const MAX_SUGGESTIONS: usize = 3;

/// A record found by a search, together with its position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub record: Record,
    pub position: usize,
}

/// Finds every record whose company contains `fragment`, ignoring case.
///
/// Matches come back in storage order. An empty result means nothing matched
/// and the caller should stop.
///
/// # Examples
///
/// ```
/// use struggle_core::record::{Record, Status};
/// use struggle_core::search::find_matches;
///
/// let records = vec![Record::new("Acme Rockets", "Pilot", Status::Hired, "")];
/// let matches = find_matches("rocket", &records);
/// assert_eq!(matches[0].position, 0);
/// ```
#[must_use]
pub fn find_matches(fragment: &str, records: &[Record]) -> Vec<Match> {
    let needle = fragment.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.company.to_lowercase().contains(&needle))
        .map(|(position, record)| Match {
            record: record.clone(),
            position,
        })
        .collect()
}

/// Company names that loosely resemble `fragment`, best first.
///
/// Used to hint at typos after [`find_matches`] came back empty.
#[must_use]
pub fn suggest_companies(fragment: &str, records: &[Record]) -> Vec<String> {
    let matcher = SkimMatcherV2::default().ignore_case();

    records
        .iter()
        .map(|record| record.company.as_str())
        .unique()
        .filter_map(|company| {
            matcher
                .fuzzy_match(company, fragment)
                .map(|score| (score, company))
        })
        .sorted_by(|(s1, c1), (s2, c2)| s2.cmp(s1).then_with(|| c1.cmp(c2)))
        .take(MAX_SUGGESTIONS)
        .map(|(_, company)| company.to_string())
        .collect()
}
