//! Orderings available when listing records.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first.
    #[default]
    Date,
    /// Oldest first.
    DateReverse,
    Company,
    Title,
    Status,
    Notes,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Date,
        SortKey::DateReverse,
        SortKey::Company,
        SortKey::Title,
        SortKey::Status,
        SortKey::Notes,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::DateReverse => "date_reverse",
            SortKey::Company => "company",
            SortKey::Title => "title",
            SortKey::Status => "status",
            SortKey::Notes => "notes",
        }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            SortKey::Date => "Sorting by Date (DESCENDING)",
            SortKey::DateReverse => "Sorting by Date (ASCENDING)",
            SortKey::Company => "Sorting by Company Name",
            SortKey::Title => "Sorting by Job Title",
            SortKey::Status => "Sorting by Status",
            SortKey::Notes => "Sorting by Notes",
        }
    }

    /// Comma separated list of every accepted key.
    #[must_use]
    pub fn options() -> String {
        Self::ALL.iter().map(SortKey::name).join(", ")
    }
}

impl Display for SortKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| Error::UnknownSortKey(s.to_string(), Self::options()))
    }
}

/// Returns `records` ordered by `key`.
///
/// Dates compare by their parsed timestamp; everything else compares by text.
/// Ties keep storage order, so [`SortKey::Date`] is exactly the reverse of
/// [`SortKey::DateReverse`].
#[must_use]
pub fn sort_records(records: &[Record], key: SortKey) -> Vec<&Record> {
    match key {
        SortKey::DateReverse => chronological(records),
        SortKey::Date => chronological(records).into_iter().rev().collect(),
        SortKey::Company => by_text(records, |record| record.company.as_str()),
        SortKey::Title => by_text(records, |record| record.title.as_str()),
        SortKey::Status => by_text(records, |record| record.status.label()),
        SortKey::Notes => by_text(records, |record| record.notes.as_str()),
    }
}

fn chronological(records: &[Record]) -> Vec<&Record> {
    records
        .iter()
        .enumerate()
        .sorted_by_key(|(position, record)| (record.timestamp(), *position))
        .map(|(_, record)| record)
        .collect()
}

fn by_text<'a>(records: &'a [Record], text: impl Fn(&'a Record) -> &'a str) -> Vec<&'a Record> {
    records.iter().sorted_by_key(|record| text(*record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;

    fn create_test_records() -> Vec<Record> {
        vec![
            Record::with_date("2024-02-01 09:00:00", "Globex", "Analyst", Status::Rejected, "b"),
            Record::with_date("2023-12-24 18:30:00", "Acme", "Pilot", Status::Pending, "c"),
            Record::with_date("2024-02-01 09:00:00", "Initech", "Engineer", Status::Hired, "a"),
            Record::with_date("2024-01-15 12:00:00", "Acme", "Designer", Status::InProgress, ""),
        ]
    }

    fn companies(records: &[&Record]) -> Vec<String> {
        records.iter().map(|record| record.company.clone()).collect()
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("date".parse::<SortKey>().unwrap(), SortKey::Date);
        assert_eq!(" Date_Reverse ".parse::<SortKey>().unwrap(), SortKey::DateReverse);
        assert_eq!("notes".parse::<SortKey>().unwrap(), SortKey::Notes);

        let err = "salary".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, Error::UnknownSortKey(_, _)));
        assert!(err.to_string().contains("date_reverse"));
    }

    #[test]
    fn test_default_is_date() {
        assert_eq!(SortKey::default(), SortKey::Date);
    }

    #[test]
    fn test_date_is_newest_first() {
        let records = create_test_records();
        let sorted = sort_records(&records, SortKey::Date);

        assert_eq!(sorted[0].date_added, "2024-02-01 09:00:00");
        assert_eq!(sorted[3].date_added, "2023-12-24 18:30:00");
    }

    #[test]
    fn test_date_orders_are_exact_reverses() {
        let records = create_test_records();
        let newest_first = sort_records(&records, SortKey::Date);
        let mut oldest_first = sort_records(&records, SortKey::DateReverse);
        oldest_first.reverse();

        assert_eq!(newest_first, oldest_first);
    }

    #[test]
    fn test_date_sort_understands_legacy_dates() {
        let mut records = create_test_records();
        records.push(Record::with_date(
            "12-31-22 23:59:59",
            "Legacy",
            "Clerk",
            Status::Pending,
            "",
        ));

        let sorted = sort_records(&records, SortKey::DateReverse);
        assert_eq!(sorted[0].company, "Legacy");
    }

    #[test]
    fn test_text_sorts_are_ascending_and_stable() {
        let records = create_test_records();

        let by_company = sort_records(&records, SortKey::Company);
        assert_eq!(companies(&by_company), vec!["Acme", "Acme", "Globex", "Initech"]);
        assert_eq!(by_company[0].title, "Pilot");
        assert_eq!(by_company[1].title, "Designer");

        let by_notes = sort_records(&records, SortKey::Notes);
        assert_eq!(companies(&by_notes), vec!["Acme", "Initech", "Globex", "Acme"]);

        let by_status = sort_records(&records, SortKey::Status);
        let statuses: Vec<Status> = by_status.iter().map(|record| record.status).collect();
        assert_eq!(
            statuses,
            vec![Status::Hired, Status::InProgress, Status::Pending, Status::Rejected]
        );
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_records(&[], SortKey::Title).is_empty());
    }
}
