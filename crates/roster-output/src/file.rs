//! Export file naming and writing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use roster_model::Record;

use crate::csv_export::records_to_csv;
use crate::error::{ExportError, Result};
use crate::json_export::records_to_json;

/// File name stem shared by every export.
pub const EXPORT_STEM: &str = "users_export";

/// Export file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Render `records` in this format.
    pub fn render(self, records: &[Record]) -> Result<String> {
        match self {
            Self::Csv => records_to_csv(records),
            Self::Json => records_to_json(records),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        })
    }
}

/// `users_export_YYYY-MM-DD.<ext>`.
pub fn export_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{EXPORT_STEM}_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Today's date in local time, used to stamp export file names.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render `records` and write them into `dir`, creating it if needed.
/// Returns the path written.
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    records: &[Record],
    date: NaiveDate,
) -> Result<PathBuf> {
    let content = format.render(records)?;
    fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
    let path = dir.join(export_file_name(format, date));
    fs::write(&path, content).map_err(|e| ExportError::io(&path, e))?;
    tracing::info!(
        path = %path.display(),
        format = format.extension(),
        records = records.len(),
        "export written"
    );
    Ok(path)
}
