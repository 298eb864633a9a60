//! Synchronization outcome reporting.

use std::path::PathBuf;

use super::error::SyncError;

/// Outcome of synchronizing a single sibling file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSyncReport {
    /// File name of the synchronized sibling (not the full path).
    pub file_name: String,

    /// Whether any key was backfilled from the reference.
    pub updated: bool,

    /// Whether the file could not be used as a starting point and was
    /// recreated from the reference data.
    pub recreated: bool,

    /// Number of keys inserted by the backfill step.
    pub added_keys: usize,
}

/// A sibling file whose synchronization failed.
#[derive(Debug)]
pub struct FileSyncFailure {
    /// Path of the file that failed.
    pub path: PathBuf,

    /// The error that stopped this file (other files are unaffected).
    pub error: SyncError,
}

/// Aggregated outcome of a whole run.
///
/// Entry order is not significant; siblings are synchronized concurrently.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Reports for files synchronized successfully.
    pub synced: Vec<FileSyncReport>,

    /// Files whose synchronization failed.
    pub failed: Vec<FileSyncFailure>,
}

impl RunReport {
    /// Whether every discovered sibling was synchronized.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Report for a given sibling file name, if it was synchronized.
    #[must_use]
    pub fn report_for(&self, file_name: &str) -> Option<&FileSyncReport> {
        self.synced.iter().find(|report| report.file_name == file_name)
    }
}
