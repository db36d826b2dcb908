use crate::error::{CheckerError, Result};
use crate::loader::ReferenceSource;
use comedo_check_common::TokenizeOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATABASE_ENV: &str = "COMEDO_CHECK_DB";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 成分データベース（ファイルパスまたはURL）
    pub database: Option<String>,
    pub timeout_seconds: u64,
    pub strict_tokenize: bool,
    pub min_candidate_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            timeout_seconds: 30,
            strict_tokenize: false,
            min_candidate_length: 3,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない設定ファイルは警告してデフォルトで続行（`config --set-db` で上書きできるように）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!(error = %e, "config path unavailable, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(path = %config_path.display(), error = %e, "ignoring unreadable config");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CheckerError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("comedo-check").join("config.json"))
    }

    /// データベースの参照先を解決（環境変数 → 設定ファイル）
    pub fn database_source(&self) -> Result<ReferenceSource> {
        // 環境変数を優先
        if let Ok(db) = std::env::var(DATABASE_ENV) {
            if !db.trim().is_empty() {
                return Ok(ReferenceSource::parse(&db));
            }
        }

        self.database
            .as_deref()
            .filter(|db| !db.trim().is_empty())
            .map(ReferenceSource::parse)
            .ok_or(CheckerError::MissingDatabase)
    }

    pub fn set_database(&mut self, database: String) -> Result<()> {
        self.database = Some(database);
        self.save()
    }

    pub fn tokenize_options(&self) -> TokenizeOptions {
        TokenizeOptions {
            min_length: self.min_candidate_length,
            strict: self.strict_tokenize,
        }
    }
}
