//! 照合結果の集計
//!
//! 評価値の降順に安定ソートし、件数を集計する。

use crate::types::{MatchResult, Report, Severity};

/// 候補列と照合結果からレポートを組み立てる
///
/// `safe_count` は「候補数 − ヒット件数」。1つの候補が複数の成分に
/// ヒットするとヒット件数が候補数を上回ることがあるため、0で下限を取る。
pub fn build_report(candidates: &[String], matches: &[MatchResult]) -> Report {
    let mut flagged = matches.to_vec();
    // Vec::sort_by は安定ソート（同評価は照合順のまま）
    flagged.sort_by(|a, b| b.entry.rating.cmp(&a.entry.rating));

    let total_checked = candidates.len();
    let flagged_count = flagged.len();

    Report {
        total_checked,
        flagged_count,
        safe_count: total_checked.saturating_sub(flagged_count),
        flagged_ingredients: flagged,
    }
}

impl Report {
    /// ヒットなし
    pub fn is_clean(&self) -> bool {
        self.flagged_count == 0
    }

    pub fn max_rating(&self) -> Option<u8> {
        self.flagged_ingredients.first().map(|m| m.entry.rating)
    }

    /// 区分ごとの件数（None → High の順）
    pub fn severity_counts(&self) -> Vec<(Severity, usize)> {
        Severity::ALL
            .iter()
            .map(|&severity| {
                let count = self
                    .flagged_ingredients
                    .iter()
                    .filter(|m| m.entry.severity() == severity)
                    .count();
                (severity, count)
            })
            .collect()
    }

    /// 指定評価値以上のヒットがあるか
    pub fn has_rating_at_least(&self, rating: u8) -> bool {
        self.max_rating().is_some_and(|max| max >= rating)
    }
}
