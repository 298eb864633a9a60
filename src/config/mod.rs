//! Run configuration: settings file, CLI overrides, validation.

mod loader;
mod manager;
mod matcher;
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::{
    ConfigManager,
    SettingsOverrides,
};
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    SyncSettings,
    ValidationError,
};
