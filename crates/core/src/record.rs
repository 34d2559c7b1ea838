use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::DATE_FORMAT;
use crate::error::{Error, Result};

/// Timestamp layouts written by older versions of the tracker. These are tried
/// before [`DATE_FORMAT`], which would otherwise read `01-02-20` as year 1.
const LEGACY_DATE_FORMATS: [&str; 3] = [
    "%m-%d-%y %H:%M:%S",
    "%m-%d-%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

/// Where a job application currently stands.
///
/// The declaration order is the order of the numeric status menu. Stored as
/// its identifier (`IN_PROGRESS`); reading also accepts the labels written by
/// older versions (`IN PROGRESS`), in any case.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum Status {
    Pending,
    InProgress,
    OfferReceived,
    Hired,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::InProgress,
        Status::OfferReceived,
        Status::Hired,
        Status::Rejected,
    ];

    /// The identifier stored in the job applications file.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN_PROGRESS",
            Status::OfferReceived => "OFFER_RECEIVED",
            Status::Hired => "HIRED",
            Status::Rejected => "REJECTED",
        }
    }

    /// Human readable label used in menus and tables.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::InProgress => "IN PROGRESS",
            Status::OfferReceived => "OFFER RECEIVED",
            Status::Hired => "HIRED",
            Status::Rejected => "REJECTED",
        }
    }

    #[must_use]
    pub fn from_menu_index(index: usize) -> Option<Status> {
        Self::ALL.get(index).copied()
    }
}

impl Display for Status {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace(' ', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for Status {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// One tracked job application, i.e. one row of the job applications file.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Record {
    #[serde(alias = "DATE ADDED")]
    pub date_added: String,
    #[serde(alias = "COMPANY")]
    pub company: String,
    #[serde(alias = "JOB TITLE")]
    pub title: String,
    #[serde(alias = "STATUS")]
    pub status: Status,
    #[serde(alias = "NOTES")]
    pub notes: String,
}

impl Record {
    /// Creates a record stamped with the current local time.
    pub fn new(company: &str, title: &str, status: Status, notes: &str) -> Self {
        Self::with_date(&now_timestamp(), company, title, status, notes)
    }

    pub fn with_date(date_added: &str, company: &str, title: &str, status: Status, notes: &str) -> Self {
        Self {
            date_added: date_added.to_string(),
            company: company.to_string(),
            title: title.to_string(),
            status,
            notes: notes.to_string(),
        }
    }

    /// Parses `date_added`, accepting the current and legacy layouts.
    #[must_use]
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date_added = self.date_added.trim();
        LEGACY_DATE_FORMATS
            .into_iter()
            .chain(std::iter::once(DATE_FORMAT))
            .find_map(|format| NaiveDateTime::parse_from_str(date_added, format).ok())
    }
}

impl Display for Record {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} at {}", self.title, self.company)
    }
}

#[must_use]
pub fn now_timestamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

/// The record attribute an update targets, in update menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Company,
    Title,
    Status,
    Notes,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Company, Field::Title, Field::Status, Field::Notes];

    #[must_use]
    pub fn from_menu_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Field::Company => "COMPANY NAME",
            Field::Title => "JOB TITLE",
            Field::Status => "APPLICATION STATUS",
            Field::Notes => "NOTES",
        }
    }
}

/// A single field change. Each variant owns its validation rule, see
/// [`FieldUpdate::from_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Company(String),
    Title(String),
    Status(Status),
    Notes(String),
}

impl FieldUpdate {
    /// Validates raw user input for `field`.
    ///
    /// Company and title must not be blank, notes may be blank and status is a
    /// number from the status menu. Returns `None` when the input is rejected.
    #[must_use]
    pub fn from_input(field: Field, input: &str) -> Option<Self> {
        let input = input.trim();
        match field {
            Field::Company if !input.is_empty() => Some(Self::Company(input.to_string())),
            Field::Title if !input.is_empty() => Some(Self::Title(input.to_string())),
            Field::Company | Field::Title => None,
            Field::Status => input
                .parse::<usize>()
                .ok()
                .and_then(Status::from_menu_index)
                .map(Self::Status),
            Field::Notes => Some(Self::Notes(input.to_string())),
        }
    }

    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::Company(_) => Field::Company,
            Self::Title(_) => Field::Title,
            Self::Status(_) => Field::Status,
            Self::Notes(_) => Field::Notes,
        }
    }

    /// Returns a copy of `record` with this change applied. `date_added` is
    /// never touched.
    #[must_use]
    pub fn apply(&self, record: &Record) -> Record {
        let mut updated = record.clone();
        match self {
            Self::Company(company) => updated.company.clone_from(company),
            Self::Title(title) => updated.title.clone_from(title),
            Self::Status(status) => updated.status = *status,
            Self::Notes(notes) => updated.notes.clone_from(notes),
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> Record {
        Record::with_date(
            "2024-03-01 09:30:00",
            "Acme",
            "Engineer",
            Status::Pending,
            "referral",
        )
    }

    #[test]
    fn test_status_menu_order() {
        for (index, status) in Status::ALL.iter().enumerate() {
            assert_eq!(Status::from_menu_index(index), Some(*status));
        }
        assert_eq!(Status::from_menu_index(5), None);
    }

    #[test]
    fn test_status_from_str_accepts_labels_and_identifiers() {
        assert_eq!("IN_PROGRESS".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("offer received".parse::<Status>().unwrap(), Status::OfferReceived);
        assert!(matches!(
            "SHORTLISTED".parse::<Status>(),
            Err(Error::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_status_display_uses_label() {
        assert_eq!(Status::OfferReceived.to_string(), "OFFER RECEIVED");
        assert_eq!(Status::OfferReceived.as_str(), "OFFER_RECEIVED");
    }

    #[test]
    fn test_record_new_sets_parseable_date() {
        let record = Record::new("Acme", "Engineer", Status::Hired, "");
        assert!(record.timestamp().is_some());
    }

    #[test]
    fn test_record_timestamp_legacy_formats() {
        let mut record = create_test_record();
        record.date_added = "05-15-20 22:15:23".to_string();
        assert!(record.timestamp().is_some());

        record.date_added = "2020/05/15 22:15:23".to_string();
        assert!(record.timestamp().is_some());

        record.date_added = "yesterday".to_string();
        assert!(record.timestamp().is_none());
    }

    #[test]
    fn test_field_update_validation() {
        assert_eq!(FieldUpdate::from_input(Field::Company, "   "), None);
        assert_eq!(FieldUpdate::from_input(Field::Title, ""), None);
        assert_eq!(
            FieldUpdate::from_input(Field::Notes, ""),
            Some(FieldUpdate::Notes(String::new()))
        );
        assert_eq!(
            FieldUpdate::from_input(Field::Status, "3"),
            Some(FieldUpdate::Status(Status::Hired))
        );
        assert_eq!(FieldUpdate::from_input(Field::Status, "5"), None);
        assert_eq!(FieldUpdate::from_input(Field::Status, "x"), None);
    }

    #[test]
    fn test_field_update_changes_only_target() {
        let record = create_test_record();

        let updated = FieldUpdate::Title("Staff Engineer".to_string()).apply(&record);
        assert_eq!(updated.title, "Staff Engineer");
        assert_eq!(updated.company, record.company);
        assert_eq!(updated.status, record.status);
        assert_eq!(updated.notes, record.notes);
        assert_eq!(updated.date_added, record.date_added);

        let updated = FieldUpdate::Status(Status::Rejected).apply(&record);
        assert_eq!(updated.status, Status::Rejected);
        assert_eq!(updated.title, record.title);
    }

    #[test]
    fn test_field_menu() {
        assert_eq!(Field::from_menu_index(0), Some(Field::Company));
        assert_eq!(Field::from_menu_index(3), Some(Field::Notes));
        assert_eq!(Field::from_menu_index(4), None);
        assert_eq!(
            FieldUpdate::Notes(String::new()).field(),
            Field::Notes
        );
    }
}
