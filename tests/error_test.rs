//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use comedo_check::error::CheckerError;
use comedo_check::loader::{fetch_source, ReferenceSource};
use std::path::PathBuf;
use std::time::Duration;

/// 存在しないデータベースファイル
#[tokio::test]
async fn test_fetch_nonexistent_file() {
    let source = ReferenceSource::File(PathBuf::from("/nonexistent/path/ingredients.json"));
    let err = fetch_source(&source).await.unwrap_err();
    assert!(matches!(err, CheckerError::FileNotFound(_)));
}

/// CheckerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CheckerError::Config("テスト設定エラー".to_string()),
        CheckerError::MissingDatabase,
        CheckerError::FileNotFound("ingredients.json".to_string()),
        CheckerError::Load("invalid ingredient data".to_string()),
        CheckerError::LoadTimeout(Duration::from_secs(30)),
        CheckerError::ExcelGeneration("Excel生成エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingDatabaseエラーのメッセージ確認
#[test]
fn test_missing_database_message() {
    let display = format!("{}", CheckerError::MissingDatabase);
    assert!(display.contains("--db"));
    assert!(display.contains("COMEDO_CHECK_DB"));
    assert!(display.contains("config --set-db"));
}

#[test]
fn test_load_timeout_message() {
    let display = format!("{}", CheckerError::LoadTimeout(Duration::from_secs(30)));
    assert!(display.contains("30s"));

    // 1秒未満でも0sにならない
    let display = format!("{}", CheckerError::LoadTimeout(Duration::from_millis(300)));
    assert!(display.contains("300ms"), "{}", display);
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CheckerError = io_err.into();

    assert!(matches!(err, CheckerError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CheckerError = json_err.into();

    assert!(matches!(err, CheckerError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let err: CheckerError = comedo_check_common::Error::NotReady.into();
    assert!(matches!(
        err,
        CheckerError::Common(comedo_check_common::Error::NotReady)
    ));
}

/// エラーチェーン（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let common_err = comedo_check_common::Error::NoCandidates;
    let expected = common_err.to_string();
    let err: CheckerError = common_err.into();

    // 透過的エラーなのでメッセージがそのまま表示される
    assert_eq!(format!("{}", err), expected);
}
