use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "filePattern")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for one synchronization run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncSettings {
    /// File name of the canonical locale within the directory.
    ///
    /// The reference file itself is never rewritten.
    pub reference_file: String,

    /// Glob matched against sibling file names.
    pub file_pattern: String,

    /// Number of sibling files synchronized in parallel.
    /// Default: 80% of CPU cores (minimum 1).
    pub concurrency: Option<usize>,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            reference_file: "en.json".to_string(),
            file_pattern: "*.json".to_string(),
            concurrency: None,
        }
    }
}

impl SyncSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Zero concurrency
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.reference_file.is_empty() {
            errors.push(ValidationError::new(
                "referenceFile",
                "The reference file name cannot be empty. Example: \"en.json\"",
            ));
        }

        if self.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "filePattern",
                "The pattern cannot be empty. Example: \"*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.file_pattern) {
            errors.push(ValidationError::new(
                "filePattern",
                format!("Invalid glob pattern '{}': {e}", self.file_pattern),
            ));
        }

        if let Some(concurrency) = self.concurrency
            && concurrency == 0
        {
            errors.push(ValidationError::new(
                "concurrency",
                "Concurrency must be at least 1. Remove this field to use the CPU-derived default",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Effective fan-out width: the configured value, or 80% of the
    /// available CPU cores (minimum 1).
    #[must_use]
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(|| (num_cpus::get() * 4 / 5).max(1))
    }
}
