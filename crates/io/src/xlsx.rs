// Excel reference table import (xlsx, xls, xlsb, ods)
//
// One-way conversion: the first worksheet's first row is taken as headers and
// every following row becomes a header-keyed record, matching the CSV reader.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::{Map, Value};

use crate::error::ImportError;

/// Import the first worksheet of an Excel workbook as header-keyed rows.
///
/// Only the first sheet is read; additional sheets are ignored. Empty cells
/// render as empty strings so every record carries every header.
pub fn read_reference_workbook(path: &Path) -> Result<Vec<Value>, ImportError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| ImportError::Spreadsheet(format!("{}: {e}", path.display())))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first_sheet = sheet_names.first().ok_or_else(|| {
        ImportError::Spreadsheet(format!("{}: workbook contains no sheets", path.display()))
    })?;

    let range = workbook
        .worksheet_range(first_sheet)
        .map_err(|e| ImportError::Spreadsheet(format!("sheet '{first_sheet}': {e}")))?;

    let mut row_iter = range.rows();
    let Some(header_row) = row_iter.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_row.iter().map(cell_text).collect();

    let mut rows = Vec::new();
    for row in row_iter {
        let mut record = Map::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = row.get(i).map(cell_text).unwrap_or_default();
            // First occurrence wins for duplicate headers
            record.entry(header.clone()).or_insert(Value::String(cell));
        }
        rows.push(Value::Object(record));
    }

    Ok(rows)
}

/// Render a cell as plain text. Whole floats drop their decimal point so
/// numeric VIN fragments read back the way they were typed.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::{Workbook, Worksheet};

    fn write_rows(sheet: &mut Worksheet, rows: &[Vec<&str>]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                sheet.write_string(r as u32, c as u16, *cell).unwrap();
            }
        }
    }

    #[test]
    fn reads_header_keyed_rows() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        write_rows(
            workbook.add_worksheet(),
            &[
                vec!["VIN", "Junk Classifier"],
                vec!["1G1AB2", "Not Junk"],
                vec!["2G1ZZ9", "Junk"],
            ],
        );
        workbook.save(file.path()).unwrap();

        let rows = read_reference_workbook(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["VIN"], "1G1AB2");
        assert_eq!(rows[1]["Junk Classifier"], "Junk");
    }

    #[test]
    fn only_first_sheet_is_read() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        write_rows(workbook.add_worksheet(), &[vec!["VIN"], vec!["1G1AB2"]]);
        write_rows(workbook.add_worksheet(), &[vec!["VIN"], vec!["2G1ZZ9"]]);
        workbook.save(file.path()).unwrap();

        let rows = read_reference_workbook(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["VIN"], "1G1AB2");
    }

    #[test]
    fn missing_trailing_cells_default_to_empty() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        write_rows(
            workbook.add_worksheet(),
            &[vec!["VIN", "Junk Classifier"], vec!["1G1AB2"]],
        );
        workbook.save(file.path()).unwrap();

        let rows = read_reference_workbook(file.path()).unwrap();
        assert_eq!(rows[0]["Junk Classifier"], "");
    }

    #[test]
    fn numeric_cells_render_without_decimal_point() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "VIN").unwrap();
        sheet.write_number(1, 0, 123456.0).unwrap();
        workbook.save(file.path()).unwrap();

        let rows = read_reference_workbook(file.path()).unwrap();
        assert_eq!(rows[0]["VIN"], "123456");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_reference_workbook(Path::new("no-such-file.xlsx")).unwrap_err();
        assert!(matches!(err, ImportError::Spreadsheet(_)));
    }
}
