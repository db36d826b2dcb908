//! 成分データベース（Reference Store）
//!
//! `{ "ingredients": [...] }` 形式のJSONから一度だけ構築し、以降は読み取り専用。
//! 照合用の小文字キーは構築時に計算しておく。

use crate::error::{Error, Result};
use crate::types::{EntryId, ReferenceEntry};
use serde::Deserialize;
use std::collections::HashSet;

/// データソースのペイロード
#[derive(Debug, Deserialize)]
struct Payload {
    ingredients: Vec<ReferenceEntry>,
}

/// 照合キー付きの成分
#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub(crate) entry: ReferenceEntry,
    pub(crate) name_key: String,
    pub(crate) alias_keys: Vec<String>,
}

impl IndexedEntry {
    fn new(mut entry: ReferenceEntry) -> Self {
        entry.alternate_names.retain(|alt| !alt.trim().is_empty());

        let name_key = entry.name.to_lowercase();
        let alias_keys = entry
            .alternate_names
            .iter()
            .map(|alt| alt.to_lowercase())
            .collect();

        Self {
            entry,
            name_key,
            alias_keys,
        }
    }

    /// 名前・別名のいずれかと双方向の部分一致があるか
    pub(crate) fn overlaps(&self, candidate_key: &str) -> bool {
        let overlap = |key: &str| candidate_key.contains(key) || key.contains(candidate_key);
        overlap(self.name_key.as_str()) || self.alias_keys.iter().any(|k| overlap(k.as_str()))
    }
}

/// 読み込み済みの成分データベース
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    entries: Vec<IndexedEntry>,
}

impl ReferenceStore {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: Payload = serde_json::from_str(json)
            .map_err(|e| Error::Load(format!("invalid ingredient data: {}", e)))?;
        Self::from_entries(payload.ingredients)
    }

    /// 成分リストから構築（ID重複・評価値・名前を検証）
    pub fn from_entries(entries: Vec<ReferenceEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Load("ingredient list is empty".into()));
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(Error::Load(format!(
                    "entry #{} (id {}): name is blank",
                    index, entry.id
                )));
            }
            if entry.rating > ReferenceEntry::MAX_RATING {
                return Err(Error::Load(format!(
                    "entry #{} ({}): rating {} is out of range 0-{}",
                    index,
                    entry.name,
                    entry.rating,
                    ReferenceEntry::MAX_RATING
                )));
            }
            if !seen.insert(&entry.id) {
                return Err(Error::Load(format!(
                    "entry #{} ({}): duplicate id {}",
                    index, entry.name, entry.id
                )));
            }
        }

        Ok(Self {
            entries: entries.into_iter().map(IndexedEntry::new).collect(),
        })
    }

    pub fn entries(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter().map(|e| &e.entry)
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &EntryId) -> Option<&ReferenceEntry> {
        self.entries().find(|e| &e.id == id)
    }

    /// 名前・別名に`query`を含む成分を検索（大文字小文字を区別しない）
    pub fn search(&self, query: &str) -> Vec<&ReferenceEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|e| {
                e.name_key.contains(&query) || e.alias_keys.iter().any(|k| k.contains(&query))
            })
            .map(|e| &e.entry)
            .collect()
    }
}
