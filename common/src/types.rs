//! 成分データと照合結果の型定義
//!
//! - ReferenceEntry: 成分データベースの1件
//! - MatchResult: 照合でヒットした成分（どの入力で一致したかを保持）
//! - Report: 1回の照合の集計結果

use serde::{Deserialize, Serialize};
use std::fmt;

/// 成分ID（JSON上は文字列・整数のどちらも許容）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Number(n) => write!(f, "{}", n),
            EntryId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        EntryId::Number(n)
    }
}

// 整数リテラルはi32に推論されるため
impl From<i32> for EntryId {
    fn from(n: i32) -> Self {
        EntryId::Number(n as i64)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        EntryId::Text(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        EntryId::Text(s)
    }
}

/// 成分データベースの1件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub id: EntryId,

    pub name: String,

    #[serde(default)]
    pub alternate_names: Vec<String>,

    /// コメドジェニック評価（0-5、5が最悪）
    pub rating: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ReferenceEntry {
    pub const MAX_RATING: u8 = 5;

    pub fn new(id: impl Into<EntryId>, name: impl Into<String>, rating: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alternate_names: Vec::new(),
            rating,
            category: None,
            description: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternate_names = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn severity(&self) -> Severity {
        Severity::from_rating(self.rating)
    }
}

/// 評価値の区分（表示バッジの色分けに対応）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 0
    None,
    /// 1-2
    Low,
    /// 3
    Moderate,
    /// 4-5
    High,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Low,
        Severity::Moderate,
        Severity::High,
    ];

    pub fn from_rating(rating: u8) -> Self {
        match rating {
            0 => Severity::None,
            1 | 2 => Severity::Low,
            3 => Severity::Moderate,
            _ => Severity::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 照合でヒットした成分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub entry: ReferenceEntry,

    /// 一致した入力側の成分名（最初に一致したもの）
    pub matched_in: String,
}

/// 照合結果の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_checked: usize,
    pub flagged_count: usize,
    pub safe_count: usize,
    /// 評価値の降順（同値は照合順）
    pub flagged_ingredients: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_rating() {
        assert_eq!(Severity::from_rating(0), Severity::None);
        assert_eq!(Severity::from_rating(1), Severity::Low);
        assert_eq!(Severity::from_rating(2), Severity::Low);
        assert_eq!(Severity::from_rating(3), Severity::Moderate);
        assert_eq!(Severity::from_rating(4), Severity::High);
        assert_eq!(Severity::from_rating(5), Severity::High);
    }

    #[test]
    fn test_entry_id_accepts_string_and_number() {
        let n: EntryId = serde_json::from_str("7").expect("数値ID");
        let s: EntryId = serde_json::from_str("\"coconut-oil\"").expect("文字列ID");
        assert_eq!(n, EntryId::Number(7));
        assert_eq!(s, EntryId::Text("coconut-oil".to_string()));
        assert_eq!(n.to_string(), "7");
    }

    #[test]
    fn test_reference_entry_deserialize() {
        let json = r#"{
            "id": 1,
            "name": "Coconut Oil",
            "alternateNames": ["Cocos Nucifera Oil"],
            "rating": 4,
            "category": "Oil"
        }"#;

        let entry: ReferenceEntry = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entry.name, "Coconut Oil");
        assert_eq!(entry.alternate_names, vec!["Cocos Nucifera Oil"]);
        assert_eq!(entry.category.as_deref(), Some("Oil"));
        assert!(entry.description.is_none());
        assert_eq!(entry.severity(), Severity::High);
    }

    #[test]
    fn test_reference_entry_aliases_optional() {
        let entry: ReferenceEntry =
            serde_json::from_str(r#"{"id":"x","name":"Silica","rating":0}"#).unwrap();
        assert!(entry.alternate_names.is_empty());
    }

    #[test]
    fn test_match_result_serialize_flattened() {
        let result = MatchResult {
            entry: ReferenceEntry::new(1, "Coconut Oil", 4),
            matched_in: "Organic Coconut Oil".to_string(),
        };

        let json = serde_json::to_string(&result).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"name\":\"Coconut Oil\""));
        assert!(json.contains("\"matchedIn\":\"Organic Coconut Oil\""));
        assert!(!json.contains("\"entry\""));
    }

    #[test]
    fn test_report_serialize_camel_case() {
        let report = Report {
            total_checked: 3,
            flagged_count: 1,
            safe_count: 2,
            flagged_ingredients: Vec::new(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"totalChecked\":3"));
        assert!(json.contains("\"flaggedCount\":1"));
        assert!(json.contains("\"safeCount\":2"));
        assert!(json.contains("\"flaggedIngredients\":[]"));
    }
}
