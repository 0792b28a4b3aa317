use serde_json::Value;

use crate::extract::{extract_field, FIELD_JUNK_CLASSIFIER, FIELD_VIN};

/// Look up the pre-assigned junk classifier for a VIN.
///
/// Scans the reference rows in order; the first row whose extracted `vin`
/// field equals the input VIN (upper-cased compare) wins. Returns that row's
/// `junk classifier` field, or `None` when the table is empty, the VIN is
/// empty, or no row matches. Callers that care must distinguish "table empty"
/// from "VIN not found" themselves.
///
/// Read-only O(n) scan. Reference tables top out at a few thousand rows, so
/// no index is built.
pub fn lookup_classification(rows: &[Value], vin: &str) -> Option<String> {
    let want = vin.trim().to_uppercase();
    if want.is_empty() || rows.is_empty() {
        return None;
    }

    let row = rows.iter().find(|row| {
        extract_field(Some(row), FIELD_VIN).is_some_and(|v| v.to_uppercase() == want)
    })?;

    extract_field(Some(row), FIELD_JUNK_CLASSIFIER)
}
