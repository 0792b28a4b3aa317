// Report record loading
//
// Report records are the extraction service's responses persisted to disk.
// They are parsed verbatim; shape enforcement is deliberately absent — the
// engine's field extractor tolerates any JSON value.

use std::path::Path;

use serde_json::Value;

use crate::error::ImportError;

/// Load one report record from a JSON document.
pub fn read_report(path: &Path) -> Result<Value, ImportError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ImportError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| ImportError::Json(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_report_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "VIN": "1G1AB2", "Status": "Not Junk" }"#)
            .unwrap();
        let report = read_report(file.path()).unwrap();
        assert_eq!(report["VIN"], "1G1AB2");
    }

    #[test]
    fn non_object_json_still_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"null").unwrap();
        assert_eq!(read_report(file.path()).unwrap(), Value::Null);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = read_report(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_report(Path::new("no-such-report.json")).unwrap_err();
        assert!(matches!(err, ImportError::Io(_)));
    }
}
