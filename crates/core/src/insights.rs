//! Status breakdown of tracked applications.

use std::str::FromStr;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::error::{Error, Result};
use crate::record::{Record, Status};

/// Which part of the breakdown to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightOption {
    #[default]
    All,
    Pending,
    InProgress,
    Offers,
    Hired,
    Rejected,
}

impl InsightOption {
    pub const ALL: [InsightOption; 6] = [
        InsightOption::All,
        InsightOption::Pending,
        InsightOption::InProgress,
        InsightOption::Offers,
        InsightOption::Hired,
        InsightOption::Rejected,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            InsightOption::All => "all",
            InsightOption::Pending => "pending",
            InsightOption::InProgress => "in_progress",
            InsightOption::Offers => "offers",
            InsightOption::Hired => "hired",
            InsightOption::Rejected => "rejected",
        }
    }

    /// The statuses this option reports on, in menu order.
    #[must_use]
    pub fn statuses(&self) -> Vec<Status> {
        match self {
            InsightOption::All => Status::ALL.to_vec(),
            InsightOption::Pending => vec![Status::Pending],
            InsightOption::InProgress => vec![Status::InProgress],
            InsightOption::Offers => vec![Status::OfferReceived],
            InsightOption::Hired => vec![Status::Hired],
            InsightOption::Rejected => vec![Status::Rejected],
        }
    }

    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            InsightOption::All => "ALL INSIGHTS",
            InsightOption::Pending => status_heading(Status::Pending),
            InsightOption::InProgress => status_heading(Status::InProgress),
            InsightOption::Offers => status_heading(Status::OfferReceived),
            InsightOption::Hired => status_heading(Status::Hired),
            InsightOption::Rejected => status_heading(Status::Rejected),
        }
    }

    #[must_use]
    pub fn options() -> String {
        Self::ALL.iter().map(InsightOption::name).join(", ")
    }
}

impl FromStr for InsightOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|option| option.name() == wanted)
            .ok_or_else(|| Error::UnknownInsightOption(s.to_string(), Self::options()))
    }
}

#[must_use]
pub fn status_heading(status: Status) -> &'static str {
    match status {
        Status::Pending => "PENDING JOBS",
        Status::InProgress => "CURRENTLY IN PROGRESS",
        Status::OfferReceived => "OFFERS RECEIVED",
        Status::Hired => "HIRES",
        Status::Rejected => "REJECTIONS",
    }
}

/// Count and share of one status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusShare {
    pub status: Status,
    pub count: usize,
    pub total: usize,
    /// Share of all records in percent, between 0 and 100.
    pub percentage: f64,
}

/// Per-status counts over a set of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    counts: IndexMap<Status, usize>,
    total: usize,
}

impl Insights {
    #[must_use]
    pub fn from_records(records: &[Record]) -> Self {
        let mut counts: IndexMap<Status, usize> =
            Status::ALL.iter().map(|status| (*status, 0)).collect();

        for record in records {
            *counts.entry(record.status).or_default() += 1;
        }

        Self {
            counts,
            total: records.len(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }

    /// Share of `status` in percent, or `None` when there are no records.
    #[must_use]
    pub fn percentage(&self, status: Status) -> Option<f64> {
        if self.is_empty() {
            return None;
        }

        Some(self.count(status) as f64 * 100.0 / self.total as f64)
    }

    /// Shares for the statuses selected by `option`. Empty when there are no
    /// records.
    #[must_use]
    pub fn shares(&self, option: InsightOption) -> Vec<StatusShare> {
        option
            .statuses()
            .into_iter()
            .filter_map(|status| {
                self.percentage(status).map(|percentage| StatusShare {
                    status,
                    count: self.count(status),
                    total: self.total,
                    percentage,
                })
            })
            .collect()
    }
}
