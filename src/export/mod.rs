pub mod json;
pub mod excel;

use crate::cli::ExportFormat;
use crate::error::Result;
use comedo_check_common::Report;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 出力ドキュメント（JSON出力の形式）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub title: String,
    /// RFC 3339
    pub checked_at: String,
    pub input: String,
    pub report: Report,
}

impl ExportDocument {
    pub fn new(title: &str, input: &str, report: Report) -> Self {
        Self {
            title: title.to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            input: input.to_string(),
            report,
        }
    }
}

fn output_path_for_format(output: &Path, title: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", title, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path, title: &str) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", title));
        let excel_path = output.join(format!("{}.xlsx", title));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(title);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// レポートを指定形式で書き出し、出力したパスを返す
pub fn export_report(
    document: &ExportDocument,
    format: &ExportFormat,
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let title = document.title.as_str();
    let written = match format {
        ExportFormat::Json => {
            let path = output_path_for_format(output, title, "json");
            json::write_json(document, &path)?;
            vec![path]
        }
        ExportFormat::Excel => {
            let path = output_path_for_format(output, title, "xlsx");
            excel::write_excel(&document.report, &path, title)?;
            vec![path]
        }
        ExportFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output, title);
            json::write_json(document, &json_path)?;
            excel::write_excel(&document.report, &excel_path, title)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        tracing::info!(path = %path.display(), "report exported");
    }

    Ok(written)
}
