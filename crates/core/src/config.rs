//! Configuration for struggle.
//!
//! This module resolves the job applications file path and holds the fixed
//! layout of the file. The resolved [`Config`] is built once by the binary and
//! handed to every component that needs it.

/// Default path for the job applications file
const DEFAULT_STORE_PATH: &str = "~/.struggle/job_applications.csv";

/// Column names of the job applications file, in file order.
pub const FIELD_NAMES: [&str; 5] = ["date_added", "company", "title", "status", "notes"];

/// Format used for the `date_added` column of new records.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Runtime configuration shared by the store and the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute path of the job applications file.
    pub store_path: String,
    /// Whether terminal output should be colored.
    pub color: bool,
}

impl Config {
    #[must_use]
    pub fn new(store_path_arg: &Option<String>, color: bool) -> Self {
        Self {
            store_path: get_store_path(store_path_arg),
            color,
        }
    }
}

/// Resolves the job applications file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use struggle_core::config::get_store_path;
///
/// let custom = get_store_path(&Some("/tmp/jobs.csv".to_string()));
/// assert_eq!(custom, "/tmp/jobs.csv");
/// ```
pub fn get_store_path(store_path_arg: &Option<String>) -> String {
    let store_path = match store_path_arg {
        Some(store_path) => store_path,
        None => DEFAULT_STORE_PATH,
    };

    shellexpand::tilde(store_path).to_string()
}
