//! Minimal CSV-to-record parsing.
//!
//! Lines are split on bare commas. There is no quote or escape handling, so a
//! value containing a comma shifts every later column of its row.

use std::collections::HashMap;

use roster_model::{Record, RecordId};

/// Split one line on commas and trim every field.
pub fn split_line(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse source text into records.
///
/// The first non-blank line is the header row; every later non-blank line
/// becomes one record. Columns are looked up by header name, and a field the
/// row does not reach is read as an empty string. Input with no data line
/// yields an empty list rather than an error.
pub fn parse_records(text: &str) -> Vec<Record> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();

    let Some((header, rows)) = lines.split_first() else {
        tracing::debug!("ingestion source is empty");
        return Vec::new();
    };
    if rows.is_empty() {
        tracing::debug!("ingestion source has a header but no data rows");
        return Vec::new();
    }

    let headers = split_line(header);
    rows.iter()
        .map(|line| {
            let values = split_line(line);
            let row: HashMap<&str, &str> = headers
                .iter()
                .enumerate()
                .map(|(idx, name)| (*name, values.get(idx).copied().unwrap_or("")))
                .collect();
            record_from_row(&row)
        })
        .collect()
}

fn record_from_row(row: &HashMap<&str, &str>) -> Record {
    let field = |name: &str| row.get(name).copied().unwrap_or("").to_string();
    Record {
        id: RecordId::new(field("id")),
        first_name: field("first_name"),
        last_name: field("last_name"),
        email: field("email"),
        gender: field("gender"),
        ip_address: field("ip_address"),
    }
}
