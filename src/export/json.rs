//! JSON出力

use super::ExportDocument;
use crate::error::Result;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub fn write_json(document: &ExportDocument, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, document)?;
    Ok(())
}
