//! Excel生成（共通ライブラリ）
//!
//! レポートを「Summary」「Flagged」の2シート構成のブックに書き出す。

use crate::types::{Report, Severity};
use rust_xlsxwriter::*;

/// 区分ごとの塗りつぶし色
fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::None => Color::RGB(0xD1FAE5),
        Severity::Low => Color::RGB(0xFEF3C7),
        Severity::Moderate => Color::RGB(0xFED7AA),
        Severity::High => Color::RGB(0xFECACA),
    }
}

const FLAGGED_HEADERS: [(&str, f64); 6] = [
    ("Rating", 8.0),
    ("Severity", 11.0),
    ("Name", 28.0),
    ("Category", 16.0),
    ("Matched In", 28.0),
    ("Description", 60.0),
];

/// Excelをバッファに生成
///
/// # Arguments
/// * `report` - チェック結果
/// * `title` - Summaryシート先頭に書くタイトル
pub fn generate_report_buffer(report: &Report, title: &str) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let title_format = Format::new().set_bold().set_font_size(14.0);

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x555555))
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let label_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    let value_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xCCCCCC));

    // Summaryシート
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Summary")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;
        sheet.set_column_width(0, 22)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        sheet.set_column_width(1, 12)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;

        sheet.write_string_with_format(0, 0, title, &title_format)
            .map_err(|e| format!("タイトル書き込みエラー: {}", e))?;

        let mut rows: Vec<(String, usize)> = vec![
            ("Total checked".to_string(), report.total_checked),
            ("Flagged".to_string(), report.flagged_count),
            ("Safe".to_string(), report.safe_count),
        ];
        rows.extend(
            report
                .severity_counts()
                .into_iter()
                .map(|(severity, count)| (format!("Severity: {}", severity), count)),
        );

        for (i, (label, count)) in rows.iter().enumerate() {
            let row = i as u32 + 2;
            sheet.write_string_with_format(row, 0, label, &label_format)
                .map_err(|e| format!("ラベル書き込みエラー: {}", e))?;
            sheet.write_number_with_format(row, 1, *count as f64, &value_format)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    // Flaggedシート
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Flagged")
            .map_err(|e| format!("シート名設定エラー: {}", e))?;

        for (col, (header, width)) in FLAGGED_HEADERS.iter().enumerate() {
            let col = col as u16;
            sheet.set_column_width(col, *width)
                .map_err(|e| format!("列幅設定エラー: {}", e))?;
            sheet.write_string_with_format(0, col, *header, &header_format)
                .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
        }

        for (i, hit) in report.flagged_ingredients.iter().enumerate() {
            let row = i as u32 + 1;
            let entry = &hit.entry;
            let severity = entry.severity();
            let row_format = value_format
                .clone()
                .set_background_color(severity_color(severity));

            let cells: [&str; 5] = [
                severity.label(),
                &entry.name,
                entry.category.as_deref().unwrap_or(""),
                &hit.matched_in,
                entry.description.as_deref().unwrap_or(""),
            ];

            sheet.write_number_with_format(row, 0, entry.rating as f64, &row_format)
                .map_err(|e| format!("評価値書き込みエラー: {}", e))?;
            for (offset, value) in cells.iter().enumerate() {
                sheet.write_string_with_format(row, offset as u16 + 1, *value, &row_format)
                    .map_err(|e| format!("値書き込みエラー: {}", e))?;
            }
        }
    }

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
