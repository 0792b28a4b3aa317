// CSV/TSV reference table import

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ImportError;

/// Import a delimited reference table as header-keyed row records.
///
/// The first record supplies the column headers; every following record
/// becomes one JSON object with a string value per header, empty string for
/// cells the row doesn't have.
pub fn read_reference_csv(path: &Path) -> Result<Vec<Value>, ImportError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    rows_from_string(&content, delimiter)
}

/// Same as [`read_reference_csv`] but with a fixed tab delimiter.
pub fn read_reference_tsv(path: &Path) -> Result<Vec<Value>, ImportError> {
    let content = read_file_as_utf8(path)?;
    rows_from_string(&content, b'\t')
}

/// Detect the most likely field delimiter by checking consistency across the
/// first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line.
/// The delimiter that produces the most consistent field count (>1 field)
/// wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Must produce >1 field on the first line to be viable
        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        // Score: (number of lines with same field count as line 1) * field_count
        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
fn read_file_as_utf8(path: &Path) -> Result<String, ImportError> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| ImportError::Io(format!("{}: {e}", path.display())))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ImportError::Io(format!("{}: {e}", path.display())))?;

    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            // Fall back to Windows-1252 (common for Excel-exported CSVs)
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn rows_from_string(content: &str, delimiter: u8) -> Result<Vec<Value>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::Csv(e.to_string()))?;
        let mut row = Map::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = record.get(i).unwrap_or("");
            // First occurrence wins for duplicate headers
            row.entry(header.clone())
                .or_insert_with(|| Value::String(cell.to_string()));
        }
        rows.push(Value::Object(row));
    }

    Ok(rows)
}
