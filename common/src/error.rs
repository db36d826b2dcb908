//! エラー型定義

use thiserror::Error;

/// 照合エンジンのエラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 成分データベースの読み込み失敗（不正なJSON・必須項目欠落・範囲外の評価値など）
    #[error("Load error: {0}")]
    Load(String),

    /// データベース読み込み完了前に照合が要求された
    #[error("Ingredient database is not loaded yet")]
    NotReady,

    #[error("No ingredients were given")]
    EmptyInput,

    /// 入力はあるが、分割後に有効な成分名が残らなかった
    #[error("No valid ingredients found in the input")]
    NoCandidates,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_load() {
        let error = Error::Load("entry #3: rating 7 is out of range".to_string());
        let display = format!("{}", error);
        assert_eq!(display, "Load error: entry #3: rating 7 is out of range");
    }

    #[test]
    fn test_error_display_not_ready() {
        let display = format!("{}", Error::NotReady);
        assert!(display.contains("not loaded"));
    }

    #[test]
    fn test_json_failure_is_load_error() {
        // パース失敗はLoadとして返る
        let error = crate::ReferenceStore::from_json("{").unwrap_err();
        assert!(matches!(error, Error::Load(_)));
        assert!(format!("{}", error).starts_with("Load error: invalid ingredient data"));
    }

    #[test]
    fn test_empty_input_and_no_candidates_differ() {
        assert_ne!(
            format!("{}", Error::EmptyInput),
            format!("{}", Error::NoCandidates)
        );
    }
}
