use std::fs::File;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use crate::error::Result;
use crate::models::MenuItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

/// Write the normalized catalog, one record per item.
pub fn export_items(items: &[MenuItem], path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => write_json(items, path)?,
        ExportFormat::Csv => write_csv(items, path)?,
    }
    info!(path = %path.display(), items = items.len(), ?format, "exported catalog");
    Ok(())
}

/// Write items as a pretty-printed JSON array.
pub fn write_json(items: &[MenuItem], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(items)?.as_bytes())?;
    Ok(())
}

/// Write items as CSV with canonical snake_case headers.
pub fn write_csv(items: &[MenuItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for item in items {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
