//! `junkcheck-io` — Ingestion of reference spreadsheets and report records.
//!
//! Reference tables arrive as CSV/TSV or Excel files and come out as ordered
//! sequences of header-keyed JSON records; report records arrive as JSON
//! documents. Both shapes feed `junkcheck-recon` unchanged.

pub mod csv;
pub mod error;
pub mod report;
pub mod xlsx;

use std::path::Path;

use serde_json::Value;

pub use error::ImportError;
pub use report::read_report;

/// Load a reference table, dispatching on the file extension.
///
/// `csv`/`tsv` go through the delimited reader, `xlsx`/`xls`/`xlsb`/`ods`
/// through calamine. Anything else is rejected rather than guessed at.
pub fn read_reference(path: &Path) -> Result<Vec<Value>, ImportError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => csv::read_reference_csv(path),
        "tsv" => csv::read_reference_tsv(path),
        "xlsx" | "xls" | "xlsb" | "ods" => xlsx::read_reference_workbook(path),
        other => Err(ImportError::UnsupportedFormat(format!(
            "{}: unknown reference table extension '{other}' (expected csv, tsv, xlsx, xls, xlsb, or ods)",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn dispatches_csv_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"VIN,Junk Classifier\n1G1AB2,Junk\n").unwrap();
        let rows = read_reference(file.path()).unwrap();
        assert_eq!(rows[0]["Junk Classifier"], "Junk");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = read_reference(Path::new("table.parquet")).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let mut file = tempfile::Builder::new().suffix(".CSV").tempfile().unwrap();
        file.write_all(b"VIN\n").unwrap();
        assert!(read_reference(file.path()).is_ok());
    }
}
