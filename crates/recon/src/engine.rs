use serde_json::Value;

use crate::extract::{extract_field, FIELD_STATUS, FIELD_VIN};
use crate::model::Verdict;
use crate::reference::lookup_classification;
use crate::resolve::resolve_status;

/// Reconcile two report records against the reference table.
///
/// `report_a` and `report_b` are the raw extraction-service responses (absent
/// when a source was not retrieved). `manual_vin` is the operator-entered
/// fallback, used only when neither report carries a VIN. `reference_rows` is
/// the parsed spreadsheet, scanned read-only.
///
/// Steps, each short-circuiting the ones after it where noted:
/// 1. Extract VIN and status from each report; empty strings count as absent.
/// 2. Both VINs present and unequal (case-sensitive, as extracted) is a
///    mismatch — the reference lookup is skipped entirely.
/// 3. Otherwise elect the lookup VIN: report A, else report B, else the
///    trimmed and upper-cased manual VIN.
/// 4. No lookup VIN → `vin_unavailable`.
/// 5. A lookup VIN with no (or an empty) reference label →
///    `vin_not_in_reference`.
/// 6. The final result is resolved from the two statuses regardless of the
///    VIN outcome.
///
/// Pure and deterministic: same inputs, same verdict.
pub fn reconcile(
    report_a: Option<&Value>,
    report_b: Option<&Value>,
    manual_vin: &str,
    reference_rows: &[Value],
) -> Verdict {
    let vin_a = non_empty(extract_field(report_a, FIELD_VIN));
    let vin_b = non_empty(extract_field(report_b, FIELD_VIN));
    let status_a = extract_field(report_a, FIELD_STATUS);
    let status_b = extract_field(report_b, FIELD_STATUS);

    let vin_mismatch = matches!((&vin_a, &vin_b), (Some(a), Some(b)) if a != b);

    let lookup_vin = if vin_mismatch {
        None
    } else {
        vin_a.or(vin_b).or_else(|| {
            let manual = manual_vin.trim();
            (!manual.is_empty()).then(|| manual.to_uppercase())
        })
    };

    let vin_unavailable = !vin_mismatch && lookup_vin.is_none();

    let classification = lookup_vin
        .as_deref()
        .and_then(|vin| lookup_classification(reference_rows, vin));

    let vin_not_in_reference = !vin_mismatch
        && !vin_unavailable
        && classification.as_deref().map_or(true, str::is_empty);

    Verdict {
        final_result: resolve_status(status_a.as_deref(), status_b.as_deref()),
        resolved_status_a: status_a.unwrap_or_default(),
        resolved_status_b: status_b.unwrap_or_default(),
        reference_classification: classification,
        vin_mismatch,
        vin_unavailable,
        vin_not_in_reference,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
