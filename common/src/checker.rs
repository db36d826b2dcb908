//! 成分チェック（分割 → 照合 → 集計）

use crate::error::{Error, Result};
use crate::matcher::match_candidates;
use crate::report::build_report;
use crate::store::ReferenceStore;
use crate::tokenizer::{tokenize_with_options, TokenizeOptions};
use crate::types::Report;

/// 入力テキストをチェックしてレポートを返す
///
/// # Errors
/// * `Error::EmptyInput` - 入力が空白のみ
/// * `Error::NoCandidates` - 分割後に有効な成分名が残らない
///
/// 候補ゼロを正常扱いしたい場合は各段階の関数を直接使う。
pub fn check_ingredients(
    input: &str,
    store: &ReferenceStore,
    options: &TokenizeOptions,
) -> Result<Report> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let candidates = tokenize_with_options(input, options);
    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    let matches = match_candidates(&candidates, store);
    let report = build_report(&candidates, &matches);

    tracing::debug!(
        total = report.total_checked,
        flagged = report.flagged_count,
        "ingredient check finished"
    );

    Ok(report)
}
