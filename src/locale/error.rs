use std::path::PathBuf;

use thiserror::Error;

/// Defines errors that may occur while reading a locale file
#[derive(Error, Debug)]
pub enum LocaleError {
    /// Error when the file cannot be read
    #[error("Failed to read locale file '{}': {source}", path.display())]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error when the file contents are not valid JSON
    #[error("Failed to parse locale file '{}': {source}", path.display())]
    Parse {
        /// Path of the malformed file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Error when the JSON document is not a single object
    #[error("Locale file '{}' is not a JSON object", path.display())]
    NotAnObject {
        /// Path of the offending file
        path: PathBuf,
    },

    /// Error when an entry's value is not a string
    #[error("Locale file '{}' has a non-string value for key '{key}'", path.display())]
    NonStringValue {
        /// Path of the offending file
        path: PathBuf,
        /// Key whose value is not a string
        key: String,
    },
}
