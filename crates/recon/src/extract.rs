use serde_json::Value;

/// Logical field name for a report's vehicle identification number.
pub const FIELD_VIN: &str = "vin";
/// Logical field name for a report's junk/not-junk status.
pub const FIELD_STATUS: &str = "status";
/// Logical field name for the reference table's pre-assigned label.
pub const FIELD_JUNK_CLASSIFIER: &str = "junk classifier";

/// Pull a named logical field out of a loosely-keyed record.
///
/// Upstream extraction services do not guarantee key casing or spelling, so a
/// key matches when it equals `logical_name` after trimming and
/// ASCII-lowercasing. The first matching key in document order wins. The
/// value is coerced to text and trimmed.
///
/// Anything that is not a JSON object (absent, null, scalar, array) counts as
/// an absent record; this function never fails.
pub fn extract_field(record: Option<&Value>, logical_name: &str) -> Option<String> {
    let map = record?.as_object()?;
    for (key, value) in map {
        if key.trim().eq_ignore_ascii_case(logical_name) {
            return Some(coerce_text(value).trim().to_string());
        }
    }
    None
}

/// Render an arbitrary JSON value as plain text.
///
/// Strings pass through; null becomes empty; arrays join their rendered
/// elements with ", "; nested objects render as compact JSON.
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(coerce_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_key_case_insensitively() {
        let record = json!({ "VIN": "1G1AB2" });
        assert_eq!(extract_field(Some(&record), FIELD_VIN).as_deref(), Some("1G1AB2"));
    }

    #[test]
    fn matches_key_with_surrounding_whitespace() {
        let record = json!({ " VIN ": "1G1" });
        assert_eq!(extract_field(Some(&record), FIELD_VIN).as_deref(), Some("1G1"));
    }

    #[test]
    fn trims_extracted_value() {
        let record = json!({ "status": "  Not Junk  " });
        assert_eq!(extract_field(Some(&record), FIELD_STATUS).as_deref(), Some("Not Junk"));
    }

    #[test]
    fn first_matching_key_wins() {
        let record = json!({ "Vin": "first", "VIN": "second" });
        assert_eq!(extract_field(Some(&record), FIELD_VIN).as_deref(), Some("first"));
    }

    #[test]
    fn absent_when_no_key_matches() {
        let record = json!({ "make": "Chevrolet", "model": "Malibu" });
        assert_eq!(extract_field(Some(&record), FIELD_VIN), None);
    }

    #[test]
    fn absent_record_yields_absent() {
        assert_eq!(extract_field(None, FIELD_VIN), None);
    }

    #[test]
    fn non_object_record_yields_absent() {
        for malformed in [json!(null), json!("vin"), json!(42), json!(["vin"])] {
            assert_eq!(extract_field(Some(&malformed), FIELD_VIN), None);
        }
    }

    #[test]
    fn coerces_non_string_values() {
        let record = json!({ "vin": 12345 });
        assert_eq!(extract_field(Some(&record), FIELD_VIN).as_deref(), Some("12345"));
    }

    #[test]
    fn coerces_arrays_to_joined_text() {
        assert_eq!(coerce_text(&json!(["Junk", "Salvage"])), "Junk, Salvage");
    }

    #[test]
    fn null_value_yields_empty_text() {
        let record = json!({ "status": null });
        assert_eq!(extract_field(Some(&record), FIELD_STATUS).as_deref(), Some(""));
    }

    #[test]
    fn junk_classifier_field_matches_spaced_header() {
        let record = json!({ "Junk Classifier": "Junk" });
        assert_eq!(
            extract_field(Some(&record), FIELD_JUNK_CLASSIFIER).as_deref(),
            Some("Junk")
        );
    }
}
