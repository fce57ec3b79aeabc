// Pipeline storage: serializing the merged table

use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::constants::OUTPUT_COLUMNS;
use crate::error::Result;
use crate::types::MergedRecord;

/// Write the merged table with a header row, one row per record.
/// The parent directory of `path` must already exist.
pub fn write_merged(path: &Path, records: &[MergedRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_records(file, records)?;
    debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// The header is written explicitly so an empty table still carries it
pub fn write_records<W: Write>(output: W, records: &[MergedRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;

    fn render(records: &[MergedRecord]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, records).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only_when_empty() {
        assert_eq!(render(&[]), "title,text,content,label,source\n");
    }

    #[test]
    fn test_rows_in_column_order_with_quoting() {
        let records = vec![MergedRecord {
            title: "Hello, world".to_string(),
            text: "He said \"hi\"".to_string(),
            content: "Hello, world He said \"hi\"".to_string(),
            label: Label::Fake,
            source: "Fake.csv".to_string(),
        }];

        let output = render(&records);
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("title,text,content,label,source"));
        assert_eq!(
            lines.next(),
            Some(r#""Hello, world","He said ""hi""","Hello, world He said ""hi""",fake,Fake.csv"#)
        );
        assert_eq!(lines.next(), None);
    }
}
