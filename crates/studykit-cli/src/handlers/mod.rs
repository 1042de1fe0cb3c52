mod context;

pub mod catalog;
pub mod config;
pub mod daily;
pub mod dist;
pub mod schedule;

pub use context::HandlerContext;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use studykit_engine::export::UTF8_BOM;

/// Create `path` for CSV output, optionally starting with a UTF-8 BOM.
pub(crate) fn create_csv(path: &Path, bom: bool) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    if bom {
        writer.write_all(UTF8_BOM)?;
    }
    Ok(writer)
}
