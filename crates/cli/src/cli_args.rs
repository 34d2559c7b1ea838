//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure and turns the
//! parsed flags into the ordered list of [`Action`]s to run, using the `clap`
//! crate.

use clap::Parser;
use struggle_core::insights::InsightOption;
use struggle_core::ordering::SortKey;

use crate::commands::Action;

const AFTER_HELP: &str = r#"LIST OPTIONS
  date           sort by date (descending)
  date_reverse   sort by date (ascending)
  company        sort by company name
  title          sort by job title
  status         sort by status
  notes          sort by notes

INSIGHT OPTIONS
  all            print all job status insights
  pending        print percentage of pending job applications
  in_progress    print percentage of in progress job applications
  offers         print percentage of job applications with an offer
  hired          print percentage of jobs you have been hired at
  rejected       print percentage of rejected job applications

EXAMPLES
  Track a new application at Stack Overflow:
      $ struggle -a "Stack Overflow"

  Update an application at Apple (lists every match at Apple first):
      $ struggle -u Apple

  Delete an application at Apple:
      $ struggle -d Apple

  List all applications sorted by company name:
      $ struggle -l company"#;

/// Command-line arguments for the struggle job application tracker.
///
/// Flags combine: every action given runs once, in the order add, update,
/// delete, list, insights.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use struggle_cli::cli_args::Args;
///
/// let args = Args::parse_from(["struggle", "-l", "company"]);
/// assert!(args.has_actions());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "struggle",
    version,
    about = "Struggle Tracker - A program that helps you track your job applications",
    after_help = AFTER_HELP,
    term_width = 0 // Just to make testing across clap features easier
)]
pub struct Args {
    /// Add a new application at COMPANY.
    #[arg(long, short = 'a', value_name = "COMPANY")]
    pub add: Option<String>,

    /// Update an existing application, searching by COMPANY.
    ///
    /// Any application whose company contains COMPANY (ignoring case) matches.
    #[arg(long, short = 'u', value_name = "COMPANY")]
    pub update: Option<String>,

    /// Delete an existing application, searching by COMPANY.
    #[arg(long, short = 'd', value_name = "COMPANY")]
    pub delete: Option<String>,

    /// List all saved applications, sorted by SORT_KEY (default: date).
    #[arg(
        long,
        short = 'l',
        value_name = "SORT_KEY",
        num_args = 0..=1,
        default_missing_value = "date",
        value_parser = parse_sort_key
    )]
    pub list: Option<SortKey>,

    /// Display application insights for STATUS (default: all).
    #[arg(
        long,
        short = 'i',
        value_name = "STATUS",
        num_args = 0..=1,
        default_missing_value = "all",
        value_parser = parse_insight_option
    )]
    pub insights: Option<InsightOption>,

    /// Path to the job applications CSV file.
    ///
    /// If not provided, defaults to `~/.struggle/job_applications.csv`.
    #[arg(long, short = 'f', env = "STRUGGLE_FILE", value_name = "PATH")]
    pub file: Option<String>,

    /// Disable colored output.
    #[arg(long, action)]
    pub no_color: bool,
}

impl Args {
    /// Whether any action flag was given.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        !self.actions().is_empty()
    }

    /// The requested actions in the order they run.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        if let Some(company) = &self.add {
            actions.push(Action::Add(company.clone()));
        }
        if let Some(fragment) = &self.update {
            actions.push(Action::Update(fragment.clone()));
        }
        if let Some(fragment) = &self.delete {
            actions.push(Action::Delete(fragment.clone()));
        }
        if let Some(sort_key) = self.list {
            actions.push(Action::List(sort_key));
        }
        if let Some(option) = self.insights {
            actions.push(Action::Insights(option));
        }

        actions
    }
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    value.parse().map_err(|e: struggle_core::error::Error| e.to_string())
}

fn parse_insight_option(value: &str) -> Result<InsightOption, String> {
    value.parse().map_err(|e: struggle_core::error::Error| e.to_string())
}
