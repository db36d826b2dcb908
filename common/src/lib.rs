//! Comedo Check Common Library
//!
//! 成分リストをデータベースと照合し、コメドジェニック成分を検出するエンジン

pub mod types;
pub mod error;
pub mod store;
pub mod tokenizer;
pub mod matcher;
pub mod report;
pub mod checker;
pub mod export;

pub use types::{EntryId, MatchResult, ReferenceEntry, Report, Severity};
pub use error::{Error, Result};
pub use store::ReferenceStore;
pub use tokenizer::{tokenize, tokenize_with_options, TokenizeOptions};
pub use matcher::match_candidates;
pub use report::build_report;
pub use checker::check_ingredients;
