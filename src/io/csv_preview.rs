//! CSV preview parsing.
//!
//! Turns pasted or uploaded CSV text into a small table for display. This is a
//! preview only: lines are split on `\n` first, so quoted fields spanning
//! several lines are not supported, and only the first rows are kept.

use crate::error::{DashboardError, DashboardResult};
use std::path::Path;

/// Maximum number of data rows kept for display.
pub const PREVIEW_ROW_LIMIT: usize = 20;

/// Display limit for header cells, in characters.
pub const HEADER_DISPLAY_LIMIT: usize = 80;

/// Display limit for body cells, in characters.
pub const CELL_DISPLAY_LIMIT: usize = 160;

/// Largest file accepted by [`read_csv_file`].
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Parsed preview of CSV text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvPreviewTable {
    pub header: Vec<String>,
    /// At most [`PREVIEW_ROW_LIMIT`] rows.
    pub rows: Vec<Vec<String>>,
    /// Number of data rows in the whole input.
    pub total_rows: usize,
}

impl CsvPreviewTable {
    /// Number of rows actually shown.
    pub fn shown_rows(&self) -> usize {
        self.total_rows.min(self.rows.len())
    }

    /// Cell text for the given position, empty when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Footer line shown under the table.
    pub fn summary(&self) -> String {
        format!(
            "{} rows total · Previewing first {}",
            self.total_rows,
            self.shown_rows()
        )
    }
}

/// Parse CSV text into a preview table.
///
/// Returns `None` when the text has no non-empty line. When
/// `force_single_header` is given and the input looks like a plain list (no
/// commas anywhere, and the first line is not already that header), every line
/// becomes a row of a single column named by the forced header.
pub fn parse_csv_preview(text: &str, force_single_header: Option<&str>) -> Option<CsvPreviewTable> {
    let lines: Vec<&str> = text.split('\n').filter(|l| !l.is_empty()).collect();
    let first_line = *lines.first()?;

    let forced = force_single_header.filter(|header| {
        !first_line.contains(',')
            && first_line.trim().to_lowercase() != header.trim().to_lowercase()
            && lines.iter().all(|l| !l.contains(','))
    });

    let table = match forced {
        Some(header) => CsvPreviewTable {
            header: vec![header.to_string()],
            rows: lines
                .iter()
                .take(PREVIEW_ROW_LIMIT)
                .map(|l| vec![l.trim().to_string()])
                .collect(),
            total_rows: lines.len(),
        },
        None => CsvPreviewTable {
            header: parse_line(first_line),
            rows: lines
                .iter()
                .skip(1)
                .take(PREVIEW_ROW_LIMIT)
                .map(|l| parse_line(l))
                .collect(),
            total_rows: lines.len().saturating_sub(1),
        },
    };

    Some(table)
}

/// Header labels of the text, in column order.
///
/// Duplicate and empty labels are dropped (first occurrence kept) since the
/// labels are used as selectable column identifiers.
pub fn csv_headers(text: &str, force_single_header: Option<&str>) -> Vec<String> {
    let Some(table) = parse_csv_preview(text, force_single_header) else {
        return Vec::new();
    };

    let mut headers: Vec<String> = Vec::with_capacity(table.header.len());
    for header in table.header {
        if header.is_empty() || headers.contains(&header) {
            continue;
        }
        headers.push(header);
    }
    headers
}

/// Count lines that contain something other than whitespace.
pub fn count_non_empty_lines(text: &str) -> usize {
    text.split('\n').filter(|l| !l.trim().is_empty()).count()
}

/// Truncate `text` to `max` characters, appending an ellipsis when cut.
pub fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut short: String = text.chars().take(max).collect();
        short.push('…');
        short
    } else {
        text.to_string()
    }
}

/// Read a CSV file picked by the user.
pub fn read_csv_file(path: &Path) -> DashboardResult<String> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(DashboardError::FileTooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let text = std::fs::read_to_string(path)?;
    tracing::info!(
        path = %path.display(),
        size_bytes = size,
        lines = count_non_empty_lines(&text),
        "📄 CSV file loaded"
    );
    Ok(text)
}

fn parse_line(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(strip_quotes).collect(),
        Some(Err(e)) => {
            tracing::debug!(error = %e, "CSV preview line kept verbatim");
            vec![strip_quotes(line.trim())]
        }
        None => Vec::new(),
    }
}

fn strip_quotes(field: &str) -> String {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_preview() {
        assert_eq!(parse_csv_preview("", None), None);
        assert_eq!(parse_csv_preview("\n\n", None), None);
    }

    #[test]
    fn test_header_and_rows() {
        let table = parse_csv_preview("name, url\nAcme, acme.com\nGlobex,globex.com\n", None)
            .unwrap();
        assert_eq!(table.header, ["name", "url"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell(0, 1), "acme.com");
        assert_eq!(table.total_rows, 2);
        assert_eq!(table.summary(), "2 rows total · Previewing first 2");
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        let table = parse_csv_preview("company,notes\nAcme,\"big, fast\"", None).unwrap();
        assert_eq!(table.rows[0], ["Acme", "big, fast"]);
    }

    #[test]
    fn test_short_rows_read_as_empty_cells() {
        let table = parse_csv_preview("a,b,c\n1", None).unwrap();
        assert_eq!(table.cell(0, 0), "1");
        assert_eq!(table.cell(0, 2), "");
        assert_eq!(table.cell(5, 0), "");
    }

    #[test]
    fn test_rows_are_capped() {
        let mut text = String::from("keyword\n");
        for i in 0..50 {
            text.push_str(&format!("kw{i}\n"));
        }
        let table = parse_csv_preview(&text, None).unwrap();
        assert_eq!(table.total_rows, 50);
        assert_eq!(table.rows.len(), PREVIEW_ROW_LIMIT);
        assert_eq!(table.shown_rows(), PREVIEW_ROW_LIMIT);
    }

    #[test]
    fn test_forced_single_header_for_plain_list() {
        let table = parse_csv_preview("running shoes\ntrail shoes\n", Some("keyword")).unwrap();
        assert_eq!(table.header, ["keyword"]);
        assert_eq!(table.total_rows, 2);
        assert_eq!(table.rows[0], ["running shoes"]);
    }

    #[test]
    fn test_forced_header_ignored_when_already_present() {
        let table = parse_csv_preview("Keyword\nrunning shoes", Some("keyword")).unwrap();
        assert_eq!(table.header, ["Keyword"]);
        assert_eq!(table.total_rows, 1);
    }

    #[test]
    fn test_forced_header_ignored_for_real_csv() {
        let table = parse_csv_preview("kw,volume\nshoes,10", Some("keyword")).unwrap();
        assert_eq!(table.header, ["kw", "volume"]);
    }

    #[test]
    fn test_csv_headers_are_unique_and_ordered() {
        assert_eq!(csv_headers("b,a,b,,c\n1,2,3,4,5", None), ["b", "a", "c"]);
        assert_eq!(csv_headers("shoes\nboots", Some("keyword")), ["keyword"]);
        assert!(csv_headers("", None).is_empty());
    }

    #[test]
    fn test_count_non_empty_lines() {
        assert_eq!(count_non_empty_lines(""), 0);
        assert_eq!(count_non_empty_lines("a\n\n  \nb\n"), 2);
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("short", 10), "short");
        assert_eq!(shorten("abcdef", 3), "abc…");
        assert_eq!(shorten("日本語テキスト", 3), "日本語…");
    }

    #[test]
    fn test_read_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leads.csv");
        std::fs::write(&path, "name,url\nAcme,acme.com\n").unwrap();
        let text = read_csv_file(&path).unwrap();
        assert_eq!(csv_headers(&text, None), ["name", "url"]);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_csv_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DashboardError::Io(_)));
    }
}
