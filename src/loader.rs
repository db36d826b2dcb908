//! 成分データベースの読み込み
//!
//! ファイルまたはURLから `{ "ingredients": [...] }` を取得し、
//! `StoreGate` で一度だけ初期化する。読み込み完了前のチェックは `NotReady` で拒否する。

use crate::error::{CheckerError, Result};
use comedo_check_common::{check_ingredients, Report, ReferenceStore, TokenizeOptions};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

/// データベースの参照先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    File(PathBuf),
    Url(String),
}

impl ReferenceSource {
    /// `http://` / `https://` で始まればURL、それ以外はファイルパス
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ReferenceSource::Url(source.to_string())
        } else {
            ReferenceSource::File(PathBuf::from(source))
        }
    }
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceSource::File(path) => write!(f, "{}", path.display()),
            ReferenceSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// 参照先から生のJSONを取得
pub async fn fetch_source(source: &ReferenceSource) -> Result<String> {
    match source {
        ReferenceSource::File(path) => {
            if !path.exists() {
                return Err(CheckerError::FileNotFound(path.display().to_string()));
            }
            Ok(tokio::fs::read_to_string(path).await?)
        }
        ReferenceSource::Url(url) => {
            let response = reqwest::get(url).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(CheckerError::Load(format!("{} returned {}", url, status)));
            }
            Ok(response.text().await?)
        }
    }
}

/// 取得とパースを行い、データベースを構築する
pub async fn load_store(source: &ReferenceSource, timeout: Duration) -> Result<ReferenceStore> {
    let body = tokio::time::timeout(timeout, fetch_source(source))
        .await
        .map_err(|_| CheckerError::LoadTimeout(timeout))??;

    let store = ReferenceStore::from_json(&body).map_err(|e| match e {
        comedo_check_common::Error::Load(msg) => CheckerError::Load(format!("{}: {}", source, msg)),
        other => other.into(),
    })?;

    tracing::info!(count = store.len(), source = %source, "loaded ingredient database");
    Ok(store)
}

/// 一度だけ初期化されるデータベースの保持先
#[derive(Debug, Default)]
pub struct StoreGate {
    cell: OnceCell<Arc<ReferenceStore>>,
}

impl StoreGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 読み込み済みのデータベースで初期化
    pub fn with_store(store: ReferenceStore) -> Self {
        Self {
            cell: OnceCell::new_with(Some(Arc::new(store))),
        }
    }

    /// データベースを読み込む
    ///
    /// 同時に呼ばれても読み込みは1回だけ。読み込み済みなら`source`は無視される。
    /// 失敗時は未初期化のまま残るので再試行できる。
    pub async fn load(&self, source: &ReferenceSource, timeout: Duration) -> Result<Arc<ReferenceStore>> {
        let store = self
            .cell
            .get_or_try_init(|| async { load_store(source, timeout).await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(store))
    }

    pub fn is_ready(&self) -> bool {
        self.cell.initialized()
    }

    pub fn store(&self) -> Result<Arc<ReferenceStore>> {
        self.cell
            .get()
            .cloned()
            .ok_or(CheckerError::Common(comedo_check_common::Error::NotReady))
    }

    /// 入力テキストをチェック（未読み込みなら即座に`NotReady`）
    pub fn check(&self, input: &str, options: &TokenizeOptions) -> Result<Report> {
        let store = self.store()?;
        Ok(check_ingredients(input, &store, options)?)
    }
}
