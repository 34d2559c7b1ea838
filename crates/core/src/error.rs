use log::error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No job applications file exists yet at `{}`.", .path)]
    StoreNotFound { path: String },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} job applications file at `{}`: {}", .action, .path, .original)]
    Csv {
        action: String,
        path: String,
        original: csv::Error,
    },

    #[error("No job applications have been tracked yet.")]
    EmptyStore,

    #[error("No job applications found matching \"{}\".", .0)]
    NoMatches(String),

    #[error("A company name is required.")]
    EmptyCompany,

    #[error("Cancelled. Nothing was written.")]
    Aborted,

    #[error("Interrupted.")]
    Interrupted,

    #[error("Record position {} is out of range for {} records.", .position, .len)]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Not a sorting option: \"{}\". Choose from: {}", .0, .1)]
    UnknownSortKey(String, String),

    #[error("Not an insight option: \"{}\". Choose from: {}", .0, .1)]
    UnknownInsightOption(String, String),

    #[error("Unknown application status: \"{}\"", .0)]
    UnknownStatus(String),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn csv_error(action: &str, path: &str, original: csv::Error) -> Self {
        error!("CSV failure while {action} `{path}`: {original}");
        Self::Csv {
            action: action.to_string(),
            path: path.to_string(),
            original,
        }
    }

    /// Whether this error ends the run because the user chose to stop.
    #[must_use]
    pub fn is_user_stop(&self) -> bool {
        matches!(self, Self::Aborted | Self::Interrupted)
    }
}
