//! File name matcher for sibling locale files.

use globset::{
    Glob,
    GlobMatcher,
};

use super::SyncSettings;
use super::loader::CONFIG_FILE_NAME;

#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidFilePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Matches directory entries against the configured sibling pattern.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    /// Name of the reference file, which is never a sibling.
    reference_file: String,
    /// Compiled sibling file pattern.
    pattern: GlobMatcher,
}

impl FileMatcher {
    /// Creates a new matcher from settings.
    ///
    /// # Errors
    /// - Invalid glob pattern
    pub fn new(settings: &SyncSettings) -> Result<Self, MatcherError> {
        let pattern = Glob::new(&settings.file_pattern)
            .map_err(|source| MatcherError::InvalidFilePattern {
                pattern: settings.file_pattern.clone(),
                source,
            })?
            .compile_matcher();

        Ok(Self { reference_file: settings.reference_file.clone(), pattern })
    }

    /// Returns true if a file with this name must be synchronized.
    ///
    /// The reference file and the configuration file are never siblings.
    #[must_use]
    pub fn is_sibling_file(&self, file_name: &str) -> bool {
        if file_name == self.reference_file || file_name == CONFIG_FILE_NAME {
            return false;
        }

        self.pattern.is_match(file_name)
    }
}
