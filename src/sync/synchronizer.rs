//! Single-file synchronization against the reference mapping.

use std::path::Path;

use crate::locale::LocaleMapping;

use super::error::SyncError;
use super::report::FileSyncReport;

/// Synchronize one sibling locale file with the reference mapping.
///
/// The file is read, backfilled with any reference key it is missing,
/// rebuilt in canonical key order and rewritten in full. Keys unknown to the
/// reference are kept and sorted last; values the sibling already had are
/// never changed. A sibling that cannot be read or parsed is recreated from
/// the reference instead of aborting the run.
///
/// Reordering happens unconditionally: a sibling that already has every
/// reference key is still rewritten in canonical order.
///
/// # Errors
/// Returns [`SyncError::Write`] when the rewritten file cannot be
/// persisted. Read and parse failures are recovered and surface via
/// [`FileSyncReport::recreated`].
pub async fn synchronize(
    path: &Path,
    reference: &LocaleMapping,
) -> Result<FileSyncReport, SyncError> {
    let (mut target, recreated) = load_target(path).await;

    let added_keys = backfill(&mut target, reference);
    let output = reorder(&target, reference);

    persist(path, &output).await?;

    Ok(FileSyncReport {
        file_name: display_name(path),
        updated: added_keys > 0,
        recreated,
        added_keys,
    })
}

/// Load a sibling file, falling back to an empty mapping when it cannot be
/// used as a starting point. The fallback is the recovery path for a
/// missing or corrupted sibling: the caller then recreates the file from
/// the reference data.
async fn load_target(path: &Path) -> (LocaleMapping, bool) {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "There was an issue reading the locale file. A new file will be created"
            );
            return (LocaleMapping::new(), true);
        }
    };

    match LocaleMapping::from_json_str(&content, path) {
        Ok(mapping) => (mapping, false),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                %err,
                "There was an issue reading the locale file. A new file will be created"
            );
            (LocaleMapping::new(), true)
        }
    }
}

/// Insert every reference key missing from the target, using the
/// reference's value. Returns the number of inserted keys.
fn backfill(target: &mut LocaleMapping, reference: &LocaleMapping) -> usize {
    let mut added_keys = 0;

    for (key, value) in reference.iter() {
        if !target.contains_key(key) {
            let _ = target.insert(key.clone(), value.clone());
            added_keys += 1;
        }
    }

    added_keys
}

/// Build the canonical-order output mapping.
///
/// Reference keys come first, in reference order, keeping the target's
/// values; keys unknown to the reference are appended sorted ascending by
/// code point.
fn reorder(target: &LocaleMapping, reference: &LocaleMapping) -> LocaleMapping {
    let mut output = LocaleMapping::new();

    for key in reference.keys() {
        if let Some(value) = target.get(key) {
            let _ = output.insert(key.clone(), value.clone());
        }
    }

    let mut extra_keys: Vec<&String> =
        target.keys().filter(|key| !reference.contains_key(key.as_str())).collect();
    extra_keys.sort();

    for key in extra_keys {
        if let Some(value) = target.get(key) {
            let _ = output.insert(key.clone(), value.clone());
        }
    }

    output
}

/// Overwrite the file with the canonical serialization.
async fn persist(path: &Path, mapping: &LocaleMapping) -> Result<(), SyncError> {
    let json = mapping
        .to_pretty_json()
        .map_err(|source| SyncError::Write { path: path.to_path_buf(), source: source.into() })?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| SyncError::Write { path: path.to_path_buf(), source })
}

/// File name used in reports and console lines.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use googletest::prelude::*;
    use tempfile::TempDir;

    use super::*;

    /// Build a reference mapping from JSON text.
    fn reference(text: &str) -> LocaleMapping {
        LocaleMapping::from_json_str(text, Path::new("/test/en.json")).unwrap()
    }

    /// Write a sibling file into the temp dir and return its path.
    fn write_sibling(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn backfills_missing_keys_and_reorders() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A", "b": "B", "c": "C"}"#);
        let path = write_sibling(&temp_dir, "ja.json", r#"{"b": "B2", "z": "Z"}"#);

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.updated, eq(true));
        assert_that!(report.recreated, eq(false));
        assert_that!(report.added_keys, eq(2));

        let written = fs::read_to_string(&path).unwrap();
        assert_that!(
            written,
            eq("{\n  \"a\": \"A\",\n  \"b\": \"B2\",\n  \"c\": \"C\",\n  \"z\": \"Z\"\n}")
        );
    }

    #[tokio::test]
    async fn empty_sibling_becomes_full_reference() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A", "b": "B"}"#);
        let path = write_sibling(&temp_dir, "de.json", "{}");

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.updated, eq(true));
        assert_that!(report.recreated, eq(false));
        assert_that!(report.added_keys, eq(2));

        let written = fs::read_to_string(&path).unwrap();
        assert_that!(written, eq(reference.to_pretty_json().unwrap().as_str()));
    }

    #[tokio::test]
    async fn reverse_ordered_sibling_is_rewritten_without_update() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A", "b": "B", "c": "C"}"#);
        let path = write_sibling(&temp_dir, "fr.json", r#"{"c": "C", "b": "B", "a": "A"}"#);

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.updated, eq(false));
        assert_that!(report.added_keys, eq(0));

        let written = fs::read_to_string(&path).unwrap();
        assert_that!(written, eq(reference.to_pretty_json().unwrap().as_str()));
    }

    #[tokio::test]
    async fn existing_values_are_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"hello": "Hello", "bye": "Bye"}"#);
        let path = write_sibling(&temp_dir, "ja.json", r#"{"hello": "こんにちは"}"#);

        let _report = synchronize(&path, &reference).await.unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let result = LocaleMapping::from_json_str(&written, &path).unwrap();
        assert_that!(result.get_str("hello"), some(eq("こんにちは")));
        assert_that!(result.get_str("bye"), some(eq("Bye")));
    }

    #[tokio::test]
    async fn extra_keys_are_kept_and_sorted_last() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A"}"#);
        let path =
            write_sibling(&temp_dir, "it.json", r#"{"zz": "1", "mm": "2", "aa": "3", "a": "A"}"#);

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.updated, eq(false));

        let written = fs::read_to_string(&path).unwrap();
        let result = LocaleMapping::from_json_str(&written, &path).unwrap();
        let keys: Vec<String> = result.keys().cloned().collect();
        assert_that!(keys, elements_are![eq("a"), eq("aa"), eq("mm"), eq("zz")]);
    }

    #[tokio::test]
    async fn corrupted_sibling_is_recreated_from_reference() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A", "b": "B"}"#);
        let path = write_sibling(&temp_dir, "es.json", "{ not json at all");

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.recreated, eq(true));
        assert_that!(report.updated, eq(true));
        assert_that!(report.added_keys, eq(2));

        let written = fs::read_to_string(&path).unwrap();
        assert_that!(written, eq(reference.to_pretty_json().unwrap().as_str()));
    }

    #[tokio::test]
    async fn nested_sibling_is_recreated_from_reference() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A"}"#);
        let path = write_sibling(&temp_dir, "ko.json", r#"{"menu": {"file": "파일"}}"#);

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.recreated, eq(true));

        let written = fs::read_to_string(&path).unwrap();
        assert_that!(written, eq(reference.to_pretty_json().unwrap().as_str()));
    }

    #[tokio::test]
    async fn missing_sibling_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A"}"#);
        let path = temp_dir.path().join("nl.json");

        let report = synchronize(&path, &reference).await.unwrap();

        assert_that!(report.recreated, eq(true));
        assert_that!(report.updated, eq(true));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn synchronization_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let reference = reference(r#"{"a": "A", "b": "B", "c": "C"}"#);
        let path = write_sibling(&temp_dir, "pl.json", r#"{"b": "B2", "z": "Z"}"#);

        let first = synchronize(&path, &reference).await.unwrap();
        let after_first = fs::read_to_string(&path).unwrap();

        let second = synchronize(&path, &reference).await.unwrap();
        let after_second = fs::read_to_string(&path).unwrap();

        assert_that!(first.updated, eq(true));
        assert_that!(second.updated, eq(false));
        assert_that!(after_second, eq(after_first.as_str()));
    }
}
