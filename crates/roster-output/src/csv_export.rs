//! CSV rendering.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use roster_model::{Record, SortKey};

use crate::error::Result;

/// Header line, unquoted.
pub fn csv_header() -> String {
    SortKey::ALL.map(SortKey::column_name).join(",")
}

/// Render records as CSV.
///
/// The header is bare; every value is double-quoted with embedded quotes
/// doubled. Lines are separated by `\n` with no trailing newline, so an empty
/// slice yields the header alone.
pub fn records_to_csv(records: &[Record]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record.values())?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    let mut out = csv_header();
    if !body.is_empty() {
        out.push('\n');
        // Writer input is all `&str`, so the buffer is valid UTF-8.
        out.push_str(&String::from_utf8_lossy(&body));
        out.pop();
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::RecordId;

    #[test]
    fn test_header_only_for_no_records() {
        assert_eq!(
            records_to_csv(&[]).unwrap(),
            "id,first_name,last_name,email,gender,ip_address"
        );
    }

    #[test]
    fn test_quotes_are_doubled() {
        let record = Record {
            id: RecordId::new("1"),
            first_name: r#"Ann "Nan""#.to_string(),
            ..Record::default()
        };
        let csv = records_to_csv(&[record]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#""1","Ann ""Nan""","","","","""#);
        assert!(!csv.ends_with('\n'));
    }
}
