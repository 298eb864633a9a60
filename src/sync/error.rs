use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;
use crate::locale::LocaleError;

/// Defines errors that may occur during a synchronization run
#[derive(Error, Debug)]
pub enum SyncError {
    /// The reference locale could not be loaded. Fatal for the run.
    #[error("Failed to load reference locale '{}': {source}", path.display())]
    Reference {
        /// Path of the reference file
        path: PathBuf,
        /// Underlying locale error
        #[source]
        source: LocaleError,
    },

    /// The locale directory could not be listed. Fatal for the run.
    #[error("Failed to read locale directory '{}': {source}", path.display())]
    DirectoryList {
        /// Path of the directory
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The sibling file pattern could not be compiled. Fatal for the run.
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    /// A synchronized mapping could not be written back. Fatal to that
    /// file's synchronization only; remaining files are still processed.
    #[error("Failed to write locale file '{}': {source}", path.display())]
    Write {
        /// Path of the file that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
