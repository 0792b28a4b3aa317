/// The safety-relevant status label. Dominates any disagreement.
pub const JUNK: &str = "Junk";
/// The clean status label, and the fallback for unrecognized disagreement.
pub const NOT_JUNK: &str = "Not Junk";

/// Resolve one authoritative status out of two possibly-conflicting report
/// statuses. Never absent; may return the empty string.
///
/// Precedence, in order: both missing → empty; one present → that one; equal
/// → that value; either side literally `Junk` → `Junk`; any other
/// disagreement → `Not Junk`.
///
/// The final fallback treats every unrecognized disagreement as clean. That
/// asymmetry is a compatibility requirement carried over from the upstream
/// policy, pending domain-owner confirmation.
pub fn resolve_status(status_a: Option<&str>, status_b: Option<&str>) -> String {
    let a = status_a.unwrap_or("");
    let b = status_b.unwrap_or("");

    if a.is_empty() && b.is_empty() {
        return String::new();
    }
    if b.is_empty() {
        return a.to_string();
    }
    if a.is_empty() {
        return b.to_string();
    }
    if a == b {
        return a.to_string();
    }
    if a == JUNK || b == JUNK {
        return JUNK.to_string();
    }
    NOT_JUNK.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_absent_yields_empty() {
        assert_eq!(resolve_status(None, None), "");
        assert_eq!(resolve_status(Some(""), Some("")), "");
    }

    #[test]
    fn single_status_passes_through() {
        assert_eq!(resolve_status(Some("Junk"), None), "Junk");
        assert_eq!(resolve_status(None, Some("Not Junk")), "Not Junk");
        assert_eq!(resolve_status(Some("Salvage"), Some("")), "Salvage");
    }

    #[test]
    fn equal_statuses_pass_through() {
        assert_eq!(resolve_status(Some("Not Junk"), Some("Not Junk")), "Not Junk");
        assert_eq!(resolve_status(Some("Salvage"), Some("Salvage")), "Salvage");
    }

    #[test]
    fn junk_dominates_disagreement() {
        assert_eq!(resolve_status(Some("Not Junk"), Some("Junk")), "Junk");
        assert_eq!(resolve_status(Some("Junk"), Some("Not Junk")), "Junk");
        assert_eq!(resolve_status(Some("Junk"), Some("Salvage")), "Junk");
    }

    #[test]
    fn other_disagreement_falls_back_to_not_junk() {
        assert_eq!(resolve_status(Some("Foo"), Some("Bar")), "Not Junk");
        assert_eq!(resolve_status(Some("Not Junk"), Some("Salvage")), "Not Junk");
    }

    #[test]
    fn equality_is_case_sensitive() {
        // "junk" is not the literal label, so this is an ordinary disagreement
        assert_eq!(resolve_status(Some("junk"), Some("Not Junk")), "Not Junk");
    }
}
