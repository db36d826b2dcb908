//! レポートのターミナル表示

use comedo_check_common::{MatchResult, Report, Severity};
use std::fmt::Write;

fn badge(hit: &MatchResult) -> String {
    format!("[{}/5 {}]", hit.entry.rating, hit.entry.severity())
}

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::None => "·",
        Severity::Low => "!",
        Severity::Moderate => "!!",
        Severity::High => "!!!",
    }
}

/// レポートを表示用の文字列に整形
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Checked: {}  Flagged: {}  Safe: {}",
        report.total_checked, report.flagged_count, report.safe_count
    );
    let _ = writeln!(out);

    if report.is_clean() {
        let _ = writeln!(out, "🎉 Great News!");
        let _ = writeln!(out, "No highly comedogenic ingredients detected in your product!");
        let _ = writeln!(
            out,
            "This doesn't guarantee the product won't cause breakouts, but it's a good sign."
        );
        return out;
    }

    let _ = writeln!(out, "⚠️ Pore-Clogging Ingredients Found:");
    for hit in &report.flagged_ingredients {
        let entry = &hit.entry;
        let _ = write!(out, "{:>3} {} {}", marker(entry.severity()), entry.name, badge(hit));
        if let Some(category) = &entry.category {
            let _ = write!(out, " ({})", category);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "      matched in: {}", hit.matched_in);
        if let Some(description) = &entry.description {
            let _ = writeln!(out, "      {}", description);
        }
    }

    out
}
