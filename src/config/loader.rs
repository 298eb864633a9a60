//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    SyncSettings,
};

/// ロケールディレクトリに置く設定ファイルの名前
pub const CONFIG_FILE_NAME: &str = ".i18n-sync.json";

/// ロケールディレクトリから設定を読み込む
///
/// `.i18n-sync.json` ファイルを探して読み込む
///
/// # Arguments
/// * `locale_dir` - ロケールファイルのあるディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_dir(locale_dir: &Path) -> Result<Option<SyncSettings>, ConfigError> {
    let config_path = locale_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: SyncSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
