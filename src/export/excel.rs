//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成してファイルに保存する

use crate::error::{CheckerError, Result};
use comedo_check_common::export::excel_core::generate_report_buffer;
use comedo_check_common::Report;
use std::path::Path;

pub fn write_excel(report: &Report, output_path: &Path, title: &str) -> Result<()> {
    let buffer = generate_report_buffer(report, title).map_err(CheckerError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)?;
    Ok(())
}
