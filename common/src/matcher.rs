//! 成分照合
//!
//! 各候補とデータベースの全成分を総当たりで比較する。
//! 一致判定は小文字化した名前・別名との双方向の部分一致。
//! 一度ヒットした成分は以降の候補では再度ヒットさせない（最初の候補を記録）。

use crate::store::ReferenceStore;
use crate::types::{EntryId, MatchResult};
use std::collections::HashSet;

/// 候補列をデータベースと照合する
///
/// 結果は「候補順 → データベース順」の出現順。
pub fn match_candidates(candidates: &[String], store: &ReferenceStore) -> Vec<MatchResult> {
    let mut flagged = Vec::new();
    let mut seen: HashSet<&EntryId> = HashSet::new();

    for candidate in candidates {
        let candidate_key = candidate.to_lowercase();

        for indexed in store.indexed() {
            if seen.contains(&indexed.entry.id) {
                continue;
            }

            if indexed.overlaps(&candidate_key) {
                tracing::debug!(
                    candidate = %candidate,
                    ingredient = %indexed.entry.name,
                    "ingredient matched"
                );
                seen.insert(&indexed.entry.id);
                flagged.push(MatchResult {
                    entry: indexed.entry.clone(),
                    matched_in: candidate.clone(),
                });
            }
        }
    }

    flagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReferenceEntry;

    fn store() -> ReferenceStore {
        ReferenceStore::from_entries(vec![
            ReferenceEntry::new(1, "Coconut Oil", 4).with_aliases(["Cocos Nucifera Oil"]),
            ReferenceEntry::new(2, "Glycerin", 0),
            ReferenceEntry::new(3, "Isopropyl Myristate", 5).with_aliases(["IPM"]),
            ReferenceEntry::new(4, "Oil X", 2),
        ])
        .expect("テスト用ストア")
    }

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn ids(results: &[MatchResult]) -> Vec<EntryId> {
        results.iter().map(|r| r.entry.id.clone()).collect()
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let results = match_candidates(&candidates(&["GLYCERIN"]), &store());
        assert_eq!(ids(&results), vec![EntryId::Number(2)]);
        assert_eq!(results[0].matched_in, "GLYCERIN");
    }

    #[test]
    fn test_candidate_contains_name() {
        let results = match_candidates(&candidates(&["Organic Coconut Oil"]), &store());
        assert_eq!(ids(&results), vec![EntryId::Number(1)]);
    }

    #[test]
    fn test_name_contains_candidate() {
        // "Myristate" ⊂ "Isopropyl Myristate"
        let results = match_candidates(&candidates(&["Myristate"]), &store());
        assert_eq!(ids(&results), vec![EntryId::Number(3)]);
    }

    #[test]
    fn test_alias_match() {
        let results = match_candidates(&candidates(&["Cocos Nucifera (Coconut) Oil", "ipm"]), &store());
        // 括弧が残ったままの表記は別名と一致しない
        assert_eq!(ids(&results), vec![EntryId::Number(3)]);

        let results = match_candidates(&candidates(&["Cocos Nucifera Oil"]), &store());
        assert_eq!(ids(&results), vec![EntryId::Number(1)]);
    }

    #[test]
    fn test_short_candidate_false_positive_kept() {
        // "Oil" は "Coconut Oil" と "Oil X" の両方に含まれる
        let results = match_candidates(&candidates(&["Oil"]), &store());
        assert_eq!(ids(&results), vec![EntryId::Number(1), EntryId::Number(4)]);
        assert!(results.iter().all(|r| r.matched_in == "Oil"));
    }

    #[test]
    fn test_first_candidate_wins() {
        let results = match_candidates(
            &candidates(&["Coconut Oil", "Virgin Coconut Oil", "coconut oil"]),
            &store(),
        );
        let coconut: Vec<_> = results
            .iter()
            .filter(|r| r.entry.id == EntryId::Number(1))
            .collect();
        assert_eq!(coconut.len(), 1);
        assert_eq!(coconut[0].matched_in, "Coconut Oil");
    }

    #[test]
    fn test_emission_order_is_candidate_then_entry() {
        let results = match_candidates(&candidates(&["Glycerin", "IPM", "Coconut Oil"]), &store());
        assert_eq!(
            ids(&results),
            vec![EntryId::Number(2), EntryId::Number(3), EntryId::Number(1)]
        );
    }

    #[test]
    fn test_no_match() {
        let results = match_candidates(&candidates(&["Water", "Silica"]), &store());
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        assert!(match_candidates(&[], &store()).is_empty());
    }
}
