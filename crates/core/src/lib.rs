//! Struggle Core Library
//!
//! This crate provides the core functionality for struggle, a personal job
//! application tracker that keeps every application in a CSV file and lets the
//! user add, search, update, delete, list and summarize them.
//!
//! # Key Features
//!
//! - **Records**: The job application model and its five statuses
//! - **Storage**: A [`store::Store`] trait with CSV file and in-memory backends
//! - **Search**: Case-insensitive company search with fuzzy suggestions
//! - **Ordering**: Sort keys for listing records
//! - **Insights**: Per-status counts and percentages
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Loading records and finding the ones at a company:
//!
//! ```no_run
//! use struggle_core::search::find_matches;
//! use struggle_core::store::{CsvStore, Store};
//!
//! let store = CsvStore::new("job_applications.csv");
//! let records = store.load_or_empty()?;
//! for found in find_matches("acme", &records) {
//!     println!("{}: {}", found.position, found.record);
//! }
//! # Ok::<(), struggle_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod insights;
pub mod ordering;
pub mod record;
pub mod search;
pub mod store;
