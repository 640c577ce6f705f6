//! The CSV upload/download boundary.
//!
//! Uploads arrive as byte streams of comma-delimited text with a header row;
//! downloads serialize the cleaned table back into the same format. The
//! round-trip contract holds on cell values: parsing a serialized table
//! reproduces it, with numbers compared by parsed value rather than text
//! form.

use crate::error::{Result, SqueegeeError};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

/// Parses an uploaded CSV byte stream into a table.
///
/// Schema is inferred from the first 10 000 rows; empty fields parse as
/// missing cells. Malformed content is rejected here, before any table
/// exists, so the core never sees a partially-parsed table.
pub fn parse_csv(bytes: &[u8]) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_infer_schema_length(Some(10_000))
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| SqueegeeError::Csv(e.to_string()))
}

/// Serializes a table into CSV bytes with a header row.
pub fn serialize_csv(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut df = df.clone();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut df)?;
    Ok(buf)
}

/// Reads and parses a CSV file.
pub fn load_csv(path: &Path) -> Result<DataFrame> {
    let bytes = std::fs::read(path)?;
    parse_csv(&bytes)
}

/// Writes a table to a CSV file.
pub fn save_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let bytes = serialize_csv(df)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::clean_df;

    #[test]
    fn test_parse_infers_kinds_and_missing_cells() -> Result<()> {
        let df = parse_csv(b"age,city\n25,NYC\n,LA\n35,\n")?;
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 2);
        assert!(df.column("age")?.dtype().is_primitive_numeric());
        assert_eq!(df.column("age")?.null_count(), 1);
        assert_eq!(df.column("city")?.null_count(), 1);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let result = parse_csv(b"a,b\n1,2\n3,4,5\n");
        assert!(matches!(result, Err(SqueegeeError::Csv(_))));
    }

    #[test]
    fn test_cleaned_table_round_trips() -> Result<()> {
        let raw = parse_csv(b"age,score,city\n25,1.5,NYC\n,2.5,\n35,3.5,LA\n")?;
        let (cleaned, _) = clean_df(&raw)?;

        let reparsed = parse_csv(&serialize_csv(&cleaned)?)?;
        assert!(cleaned.equals(&reparsed));
        Ok(())
    }

    #[test]
    fn test_save_and_load_files() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");

        let df = parse_csv(b"a,b\n1,x\n2,y\n")?;
        save_csv(&df, &path)?;
        let loaded = load_csv(&path)?;
        assert!(df.equals(&loaded));
        Ok(())
    }
}
