use crate::error::{FarmGuardError, Result};
use farmguard_common::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "FARMGUARD_API_URL";

/// 起動時に一度だけ読み込み、以降は変更しない
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    /// 環境変数 > 設定ファイル > 既定値
    pub fn load() -> Result<Self> {
        Ok(Self::load_from(&Self::config_path()?)?.with_env_override())
    }

    /// 環境変数の上書きを適用
    pub fn with_env_override(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url;
            }
        }
        self.normalize();
        self
    }

    /// 設定ファイルを読む。読めない・壊れている場合は警告して既定値
    ///
    /// `config` コマンドで壊れたファイルを上書きできるようにする
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config file unreadable; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let mut config: Config = serde_json::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FarmGuardError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("farmguard").join("config.json"))
    }

    pub fn set_api_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FarmGuardError::Config(format!(
                "API URL must start with http:// or https://: {}",
                url
            )));
        }
        self.api_base_url = url;
        self.normalize();
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(FarmGuardError::Config("timeout must be at least 1 second".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }

    fn normalize(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        if self.timeout_seconds == 0 {
            self.timeout_seconds = Self::default().timeout_seconds;
        }
    }
}
