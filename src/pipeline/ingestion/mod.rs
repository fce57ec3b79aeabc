// Pipeline ingestion: loading one source file into an in-memory table

use csv::ReaderBuilder;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::debug;

use crate::constants::NA_TOKENS;
use crate::error::Result;

/// A fully materialized source table. Missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// The set of column names present, used for schema resolution
    pub fn column_names(&self) -> HashSet<&str> {
        self.headers.iter().map(String::as_str).collect()
    }

    /// Position of a column. A repeated header resolves to its first occurrence.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at `row` / `column`; short rows read as missing
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Map a raw cell to a value, treating the standard NA markers as missing
fn parse_cell(raw: &str) -> Option<String> {
    if NA_TOKENS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Read a headered CSV file. Rows may be shorter or longer than the header.
pub fn load_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path)?;
    let table = read_table(file)?;
    debug!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.headers,
        path.display()
    );
    Ok(table)
}

pub fn read_table<R: std::io::Read>(input: R) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<Option<String>> = record
            .iter()
            .take(headers.len())
            .map(parse_cell)
            .collect();
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_table_with_missing_markers() {
        let csv = "title,text,label\nHello,NA,real\n,body,\nnull,N/A,fake\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.headers, vec!["title", "text", "label"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, 0), Some("Hello"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
        assert_eq!(table.cell(1, 2), None);
        assert_eq!(table.cell(2, 0), None);
        assert_eq!(table.cell(2, 2), Some("fake"));
    }

    #[test]
    fn test_na_markers_are_matched_exactly() {
        let csv = "title\n\" NA \"\nna\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.cell(0, 0), Some(" NA "));
        assert_eq!(table.cell(1, 0), Some("na"));
    }

    #[test]
    fn test_ragged_rows() {
        let csv = "title,text,label\nshort\nT,B,real,extra\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.cell(0, 0), Some("short"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.rows[1].len(), 3);
        assert_eq!(table.cell(1, 2), Some("real"));
    }

    #[test]
    fn test_duplicate_header_resolves_to_first() {
        let csv = "label,title,label\nreal,T,fake\n";
        let table = read_table(csv.as_bytes()).unwrap();

        let idx = table.column_index("label").unwrap();
        assert_eq!(idx, 0);
        assert_eq!(table.cell(0, idx), Some("real"));
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let csv = "\u{feff}title,text\nT,B\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert!(table.column_names().contains("title"));
        assert_eq!(table.column_index("title"), Some(0));
    }

    #[test]
    fn test_quoted_fields_keep_embedded_newlines() {
        let csv = "title,text\n\"A, title\",\"line one\nline two\"\n";
        let table = read_table(csv.as_bytes()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), Some("A, title"));
        assert_eq!(table.cell(0, 1), Some("line one\nline two"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_table(Path::new("/nonexistent/source.csv"));
        assert!(matches!(result, Err(crate::error::MergerError::Io(_))));
    }
}
