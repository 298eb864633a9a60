//! 設定管理を行うモジュール

use std::path::PathBuf;

use super::{
    ConfigError,
    SyncSettings,
    loader,
};

/// コマンドライン引数による設定の上書き
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// 参照ファイル名の上書き
    pub reference_file: Option<String>,
    /// ファイルパターンの上書き
    pub file_pattern: Option<String>,
    /// 並列数の上書き
    pub concurrency: Option<usize>,
}

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: SyncSettings,

    /// ロケールディレクトリのパス
    locale_dir: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SyncSettings::default(), locale_dir: None }
    }

    /// 設定を読み込む
    ///
    /// ディレクトリの設定ファイルを読み込み、コマンドラインの上書きを
    /// 適用してから検証する
    ///
    /// # Arguments
    /// * `locale_dir` - ロケールファイルのあるディレクトリ
    /// * `overrides` - コマンドライン引数による上書き
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(
        &mut self,
        locale_dir: PathBuf,
        overrides: &SettingsOverrides,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for locale directory: {:?}", locale_dir);

        // ディレクトリの設定を読み込み
        let mut settings =
            loader::load_from_dir(&locale_dir)?.map_or_else(SyncSettings::default, |ds| {
                tracing::debug!("Loaded directory settings: {:?}", ds);
                ds
            });

        // コマンドラインの上書きを適用
        if let Some(reference_file) = &overrides.reference_file {
            settings.reference_file = reference_file.clone();
        }
        if let Some(file_pattern) = &overrides.file_pattern {
            settings.file_pattern = file_pattern.clone();
        }
        if let Some(concurrency) = overrides.concurrency {
            settings.concurrency = Some(concurrency);
        }

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を保存
        self.current_settings = settings;
        self.locale_dir = Some(locale_dir);
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &SyncSettings {
        &self.current_settings
    }

    /// ロケールディレクトリを取得
    #[must_use]
    pub const fn locale_dir(&self) -> Option<&PathBuf> {
        self.locale_dir.as_ref()
    }
}
