//! Struggle CLI Library
//!
//! This crate provides the command-line interface for struggle, a personal
//! job application tracker. It parses flags into actions, runs the interactive
//! add/update/delete flows and prints listings and insights.
//!
//! # Key Features
//!
//! - **Interactive Flows**: Prompted add, update and delete with a confirmation step
//! - **Search by Company**: Case-insensitive substring search with "did you mean" hints
//! - **Sorted Listings**: Listings by date, company, title, status or notes
//! - **Insights**: Counts and shares of applications per status
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`commands`]: One handler per action, run against a [`commands::Session`]
//! - [`prompts`]: Validated interactive input behind the [`prompts::Prompter`] trait
//! - [`presentation`]: Styled output behind the [`presentation::Presenter`] trait
//!
//! # Examples
//!
//! The CLI binary (`struggle`) can be used in several ways:
//!
//! ```bash
//! # Track a new application
//! struggle -a "Stack Overflow"
//!
//! # Update or delete an application, searching by company
//! struggle -u apple
//! struggle -d apple
//!
//! # List applications, newest first or by another key
//! struggle -l
//! struggle -l company
//!
//! # Show insights for every status or just one
//! struggle -i
//! struggle -i rejected
//!
//! # Use another applications file
//! struggle -f ~/jobs.csv -l
//! ```

pub mod cli_args;
pub mod commands;
pub mod presentation;
pub mod prompts;
