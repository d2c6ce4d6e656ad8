//! CSV import/export for records
//!
//! Columns: `record_id,user_id,rtype,category,amount,occurred_on,note`.
//! `record_id`, `user_id` and `note` may be empty on import; imported rows
//! are always re-owned by the importing user.

use crate::config::CSV_HEADER;
use crate::database::{NewRecord, Record, RecordType};
use crate::error::{AppError, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Columns an import file must carry
const REQUIRED_COLUMNS: [&str; 4] = ["rtype", "category", "amount", "occurred_on"];

/// One CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRecord {
    pub record_id: Option<i64>,
    pub user_id: Option<i64>,
    pub rtype: RecordType,
    pub category: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
    #[serde(default)]
    pub note: String,
}

impl CsvRecord {
    /// Insert request owned by `user_id`, whatever the row said
    pub fn into_new_record(self, user_id: i64) -> NewRecord {
        NewRecord {
            user_id,
            rtype: self.rtype,
            category: self.category,
            amount: self.amount,
            occurred_on: self.occurred_on,
            note: self.note,
        }
    }
}

impl From<&Record> for CsvRecord {
    fn from(record: &Record) -> Self {
        Self {
            record_id: Some(record.id),
            user_id: Some(record.user_id),
            rtype: record.rtype,
            category: record.category.clone(),
            amount: record.amount,
            occurred_on: record.occurred_on,
            note: record.note.clone(),
        }
    }
}

/// Parse CSV rows with a header line
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CsvRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(AppError::Validation(format!("CSV is missing column '{}'", column)));
        }
    }

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let row: CsvRecord = row?;
        records.push(row);
    }

    Ok(records)
}

/// Write records with a header line
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(CsvRecord::from(record))?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn load_records_from_csv(path: &Path) -> Result<Vec<CsvRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            AppError::NotFound(format!("CSV file {}", path.display()))
        }
        _ => AppError::Io(e),
    })?;

    let records = read_records(BufReader::new(file))?;
    tracing::debug!("Loaded {} rows from {:?}", records.len(), path);
    Ok(records)
}

/// Write records to `path`, creating parent directories
pub fn save_records_to_csv(path: &Path, records: &[Record]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    write_records(BufWriter::new(file), records)?;

    tracing::debug!("Saved {} rows to {:?}", records.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: i64, rtype: RecordType, category: &str, amount: f64, date: &str, note: &str) -> Record {
        Record {
            id,
            user_id: 1,
            rtype,
            category: category.to_string(),
            amount,
            occurred_on: date.parse().unwrap(),
            note: note.to_string(),
        }
    }

    #[test]
    fn test_csv_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("records.csv");

        let records = vec![
            record(1, RecordType::Income, "salary", 1000.0, "2025-01-01", "Jan"),
            record(2, RecordType::Expense, "food", 120.5, "2025-01-05", "noodles, extra spicy"),
            record(3, RecordType::Expense, "misc", 3.0, "2025-01-06", ""),
            record(4, RecordType::Expense, "food", 8.0, "2025-01-07", "  lunch  "),
        ];
        save_records_to_csv(&path, &records).unwrap();
        assert!(path.exists());

        let loaded = load_records_from_csv(&path).unwrap();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded[3].note, "  lunch  ");
        for (record, row) in records.iter().zip(&loaded) {
            assert_eq!(row, &CsvRecord::from(record));
        }
    }

    #[test]
    fn test_header_line() {
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim_end(), CSV_HEADER.join(","));
    }

    #[test]
    fn test_optional_columns_may_be_empty_or_missing() {
        let data = "\
record_id,user_id,rtype,category,amount,occurred_on,note
,,EXPENSE,food,12.5,2025-01-02,
7,42,INCOME,salary,100,2025-01-03,bonus
";
        let rows = read_records(data.as_bytes()).unwrap();
        assert_eq!(rows[0].record_id, None);
        assert_eq!(rows[0].note, "");
        assert_eq!(rows[1].user_id, Some(42));

        let minimal = "rtype,category,amount,occurred_on\nEXPENSE,food,1.5,2025-02-01\n";
        let rows = read_records(minimal.as_bytes()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 1.5);

        let new_record = rows[0].clone().into_new_record(9);
        assert_eq!(new_record.user_id, 9);
        assert_eq!(new_record.note, "");
    }

    #[test]
    fn test_malformed_rows_are_errors() {
        let bad_amount = "rtype,category,amount,occurred_on\nEXPENSE,food,lots,2025-02-01\n";
        assert!(matches!(read_records(bad_amount.as_bytes()), Err(AppError::Csv(_))));

        let bad_type = "rtype,category,amount,occurred_on\nGIFT,food,1,2025-02-01\n";
        assert!(matches!(read_records(bad_type.as_bytes()), Err(AppError::Csv(_))));

        let bad_date = "rtype,category,amount,occurred_on\nEXPENSE,food,1,02/01/2025\n";
        assert!(matches!(read_records(bad_date.as_bytes()), Err(AppError::Csv(_))));

        let missing = "rtype,category,occurred_on\nEXPENSE,food,2025-02-01\n";
        assert!(matches!(read_records(missing.as_bytes()), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_records_from_csv(&temp.path().join("nope.csv"));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
