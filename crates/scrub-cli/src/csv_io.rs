//! CSV reading and writing for the scan pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use scrub_core::Table;

/// Reads a CSV file into a table.
///
/// The first record is the header. Ragged rows are accepted as-is;
/// the table pads short rows on read.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("failed to read header of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("failed to read record in {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(columns, rows))
}

/// Writes a table as CSV, padding ragged rows to the header width.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(table.columns())?;
    for row in 0..table.row_count() {
        let record: Vec<&str> = (0..table.column_count())
            .map(|col| table.value_at(row, col).unwrap_or(""))
            .collect();
        writer.write_record(&record)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "name,phone").unwrap();
        writeln!(f, "Asha,9876543210").unwrap();
        writeln!(f, "Ravi").unwrap();
        drop(f);

        let table = read_table(&path).unwrap();
        assert_eq!(table.columns(), &["name", "phone"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value_at(0, 1), Some("9876543210"));
        // Ragged row reads as empty.
        assert_eq!(table.value_at(1, 1), Some(""));
    }

    #[test]
    fn round_trips_through_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()], vec!["3".into()]],
        );

        write_table(&path, &table).unwrap();
        let back = read_table(&path).unwrap();
        assert_eq!(back.columns(), table.columns());
        assert_eq!(back.value_at(0, 0), Some("1"));
        assert_eq!(back.value_at(1, 1), Some(""));
    }
}
