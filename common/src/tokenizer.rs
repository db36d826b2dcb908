//! 成分リストの分割
//!
//! カンマ・セミコロン・改行で区切り、短すぎる断片を除外したうえで
//! 括弧内の補足（"(rating 4)" など）を取り除く。

use regex::Regex;

/// 分割オプション
#[derive(Debug, Clone)]
pub struct TokenizeOptions {
    /// この文字数未満の断片は除外
    pub min_length: usize,
    /// 括弧除去後にも文字数判定を行う
    pub strict: bool,
}

impl Default for TokenizeOptions {
    fn default() -> Self {
        Self {
            min_length: 3,
            strict: false,
        }
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '\n')
}

/// 括弧内の文字列を除去（入れ子は扱わない）
fn strip_parenthetical(piece: &str) -> String {
    lazy_static::lazy_static! {
        static ref PAREN_RE: Regex = Regex::new(r"\([^)]*\)").unwrap();
    }
    PAREN_RE.replace_all(piece, "").trim().to_string()
}

/// 生テキストを成分名の候補列に分割する
pub fn tokenize(raw: &str) -> Vec<String> {
    tokenize_with_options(raw, &TokenizeOptions::default())
}

pub fn tokenize_with_options(raw: &str, options: &TokenizeOptions) -> Vec<String> {
    let long_enough = |s: &str| s.chars().count() >= options.min_length;

    let candidates: Vec<String> = raw
        .split(is_separator)
        .map(str::trim)
        .filter(|piece| long_enough(*piece))
        .map(strip_parenthetical)
        .filter(|candidate| !candidate.is_empty())
        .filter(|candidate| !options.strict || long_enough(candidate.as_str()))
        .collect();

    tracing::debug!(count = candidates.len(), "tokenized ingredient list");
    candidates
}
