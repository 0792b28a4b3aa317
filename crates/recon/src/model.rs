use serde::Serialize;

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// The single output of one reconciliation: resolved per-source statuses, the
/// authoritative result, the reference table's label, and diagnostic flags.
///
/// At most one of `vin_mismatch`, `vin_unavailable`, `vin_not_in_reference`
/// is true — they are computed in that priority order and each one
/// short-circuits the rest. Created fresh per evaluation; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Status extracted from report A, or empty if absent.
    pub resolved_status_a: String,
    /// Status extracted from report B, or empty if absent.
    pub resolved_status_b: String,
    /// The single authoritative status under the precedence policy.
    pub final_result: String,
    /// The reference table's pre-assigned label for the looked-up VIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_classification: Option<String>,
    /// Both reports carried a VIN and they disagree.
    pub vin_mismatch: bool,
    /// No VIN could be established from either report or manual entry.
    pub vin_unavailable: bool,
    /// A VIN was established but the reference table has no label for it.
    pub vin_not_in_reference: bool,
}

impl Verdict {
    /// True when the reference classification is present and equals the final
    /// result, ignoring case.
    pub fn classification_matches(&self) -> bool {
        self.reference_classification
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(&self.final_result))
    }
}
