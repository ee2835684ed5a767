//! Roster export.
//!
//! Renders records as CSV or JSON and writes them to a dated file:
//!
//! - **CSV**: bare header, every value quoted, `\n` between lines
//! - **JSON**: pretty-printed array of full records
//!
//! Files are named `users_export_YYYY-MM-DD.csv|json`.

mod csv_export;
mod error;
mod file;
mod json_export;

pub use csv_export::{csv_header, records_to_csv};
pub use error::{ExportError, Result};
pub use file::{EXPORT_STEM, ExportFormat, export_file_name, today, write_export};
pub use json_export::records_to_json;
