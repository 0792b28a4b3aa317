use std::fmt;

#[derive(Debug)]
pub enum ImportError {
    /// File read error.
    Io(String),
    /// CSV parse error.
    Csv(String),
    /// Excel workbook error.
    Spreadsheet(String),
    /// Report JSON parse error.
    Json(String),
    /// File extension not recognized as a reference table format.
    UnsupportedFormat(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::Spreadsheet(msg) => write!(f, "spreadsheet error: {msg}"),
            Self::Json(msg) => write!(f, "JSON error: {msg}"),
            Self::UnsupportedFormat(msg) => write!(f, "unsupported format: {msg}"),
        }
    }
}

impl std::error::Error for ImportError {}
