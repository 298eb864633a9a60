//! Reference locale loading.

use std::path::Path;

use super::error::LocaleError;
use super::mapping::LocaleMapping;

/// Load the reference locale mapping.
///
/// The reference is the source of truth for the key set and the canonical
/// key order. A failure here is fatal for the whole run, so no fallback is
/// attempted and nothing is written.
///
/// # Errors
/// - file read error
/// - JSON parse error or shape error (not a flat string mapping)
pub async fn load_reference(path: &Path) -> Result<LocaleMapping, LocaleError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LocaleError::Read { path: path.to_path_buf(), source })?;

    LocaleMapping::from_json_str(&content, path)
}
