//! Directory-wide synchronization.

use std::path::{
    Path,
    PathBuf,
};

use futures::StreamExt;

use crate::config::{
    FileMatcher,
    SyncSettings,
};
use crate::locale::load_reference;

use super::error::SyncError;
use super::report::{
    FileSyncFailure,
    FileSyncReport,
    RunReport,
};
use super::synchronizer::synchronize;

/// Drives synchronization of every sibling locale file in one directory.
///
/// The reference file is loaded exactly once; siblings touch disjoint files
/// and are synchronized concurrently with no shared mutable state.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    /// Validated run settings.
    settings: SyncSettings,
    /// Compiled sibling file matcher.
    matcher: FileMatcher,
}

impl Orchestrator {
    /// Create an orchestrator for the given settings.
    ///
    /// # Errors
    /// - Invalid sibling file pattern
    pub fn new(settings: SyncSettings) -> Result<Self, SyncError> {
        let matcher = FileMatcher::new(&settings)?;

        Ok(Self { settings, matcher })
    }

    /// Synchronize every sibling locale file in `locale_dir`.
    ///
    /// The reference is loaded first, then all discovered siblings are
    /// synchronized with bounded concurrency. All synchronizations are
    /// joined before the report is returned; a failed sibling never stops
    /// the remaining ones.
    ///
    /// # Errors
    /// - [`SyncError::Reference`] when the reference file cannot be loaded
    /// - [`SyncError::DirectoryList`] when the directory cannot be read
    pub async fn run(&self, locale_dir: &Path) -> Result<RunReport, SyncError> {
        let reference_path = locale_dir.join(&self.settings.reference_file);
        let reference = load_reference(&reference_path)
            .await
            .map_err(|source| SyncError::Reference { path: reference_path.clone(), source })?;
        tracing::debug!(
            path = %reference_path.display(),
            keys = reference.len(),
            "Loaded reference locale"
        );

        let files = self.find_sibling_files(locale_dir).await?;
        tracing::debug!(count = files.len(), "Discovered sibling locale files");

        let mut report = RunReport::default();
        {
            let reference = &reference;
            let mut outcomes = futures::stream::iter(files.into_iter().map(|path| {
                async move {
                    let outcome = synchronize(&path, reference).await;
                    (path, outcome)
                }
            }))
            .buffer_unordered(self.settings.effective_concurrency());

            while let Some((path, outcome)) = outcomes.next().await {
                match outcome {
                    Ok(file_report) => {
                        log_report(&file_report);
                        report.synced.push(file_report);
                    }
                    Err(error) => {
                        tracing::error!(
                            path = %path.display(),
                            %error,
                            "Failed to synchronize locale file"
                        );
                        report.failed.push(FileSyncFailure { path, error });
                    }
                }
            }
        }

        Ok(report)
    }

    /// Enumerate candidate sibling files in `locale_dir` (non-recursive).
    ///
    /// Selects plain files whose name matches the configured pattern,
    /// excluding the reference file itself.
    async fn find_sibling_files(&self, locale_dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
        let mut entries = tokio::fs::read_dir(locale_dir)
            .await
            .map_err(|source| SyncError::DirectoryList { path: locale_dir.to_path_buf(), source })?;

        let mut found_files = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(source) => {
                    return Err(SyncError::DirectoryList {
                        path: locale_dir.to_path_buf(),
                        source,
                    });
                }
            };

            if !entry.file_type().await.is_ok_and(|ft| ft.is_file()) {
                continue;
            }

            let file_name = entry.file_name();
            // A name the pattern cannot even represent is never a sibling
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if !self.matcher.is_sibling_file(name) {
                continue;
            }

            found_files.push(entry.path());
        }

        Ok(found_files)
    }
}

/// Emit the per-file console line.
fn log_report(report: &FileSyncReport) {
    if report.updated {
        tracing::info!(
            file = %report.file_name,
            added = report.added_keys,
            "Locale file has been updated and keys sorted"
        );
    } else {
        tracing::info!(
            file = %report.file_name,
            "Locale file is already up-to-date; keys have been sorted"
        );
    }
}
