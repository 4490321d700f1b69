//! Read/write page documents from disk.

use crate::config::LinkmapConfig;
use crate::record::PageRecord;
use crate::schema;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load the records of a JSON page document.
pub fn load_records(path: &Path) -> Result<Vec<PageRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read page document from {}", path.display()))?;
    schema::from_json(&json).with_context(|| format!("in {}", path.display()))
}

/// Load a page document, rejecting it if it holds more records than `input.max_pages`.
pub fn load_records_checked(path: &Path, config: &LinkmapConfig) -> Result<Vec<PageRecord>> {
    let records = load_records(path)?;
    config
        .check_page_count(records.len())
        .with_context(|| format!("in {}", path.display()))?;
    Ok(records)
}

/// Write records as a JSON page document, creating parent directories if needed.
pub fn save_records(path: &Path, records: &[PageRecord]) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    let json = schema::to_json(records)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write page document to {}", path.display()))?;
    Ok(())
}
