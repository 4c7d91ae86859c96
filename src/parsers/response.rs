//! Validation of raw generation-model output into a [`RepairAnalysis`].
//!
//! The model is instructed to return a bare JSON object, but compliance is
//! not guaranteed: it may wrap the payload in a markdown fence, omit the
//! optional fields, or hallucinate types. This module is the only defense, so
//! it is a total function over arbitrary input and never coerces types.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::AdvisorError;
use crate::models::RepairAnalysis;

// Optional surrounding fence, with an optional language tag on the opener.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(?:json)?\s*\n?(.*?)\n?\s*```$").expect("fence regex is valid")
});

/// Strip a surrounding markdown code fence, if present.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    match FENCE_RE.captures(trimmed) {
        Some(caps) => caps.get(1).map_or(trimmed, |m| m.as_str().trim()),
        None => trimmed,
    }
}

/// Parse and validate raw model output into a [`RepairAnalysis`].
///
/// Fails with [`AdvisorError::MalformedResponse`] when the payload is not a
/// JSON object, the diagnosis text is missing or empty, the cost estimate is
/// missing, fractional, or negative, or a present pros/cons field is not an
/// array of strings. Absent pros/cons normalize to empty vectors.
pub fn parse_analysis(raw: &str) -> Result<RepairAnalysis, AdvisorError> {
    let payload = strip_code_fence(raw);

    let value: Value = serde_json::from_str(payload)
        .map_err(|e| AdvisorError::MalformedResponse(format!("not valid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| AdvisorError::MalformedResponse("payload is not a JSON object".into()))?;

    let problem_analysis = object
        .get("problem_analyza")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| malformed_field("problem_analyza", "a non-empty string"))?
        .to_string();

    let estimated_cost_czk = object
        .get("odhadovana_cena_kc")
        .and_then(Value::as_u64)
        .ok_or_else(|| malformed_field("odhadovana_cena_kc", "a non-negative whole number"))?;

    let pros = string_array_or_empty(object.get("klady_opravy"), "klady_opravy")?;
    let cons = string_array_or_empty(object.get("zapory_opravy"), "zapory_opravy")?;

    let device_info = match object.get("info_o_zarizeni") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(malformed_field("info_o_zarizeni", "a string")),
    };

    Ok(RepairAnalysis { problem_analysis, estimated_cost_czk, pros, cons, device_info })
}

fn malformed_field(field: &str, expected: &str) -> AdvisorError {
    AdvisorError::MalformedResponse(format!("field '{field}' is missing or not {expected}"))
}

/// An absent (or null) field normalizes to empty; a present field must be an
/// array whose every element is a string.
fn string_array_or_empty(value: Option<&Value>, field: &str) -> Result<Vec<String>, AdvisorError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| malformed_field(field, "an array of strings"))
            })
            .collect(),
        Some(_) => Err(malformed_field(field, "an array of strings")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_normalizes_optional_fields() {
        let record = parse_analysis(r#"{"problem_analyza":"X","odhadovana_cena_kc":2500}"#).unwrap();
        assert_eq!(record.problem_analysis, "X");
        assert_eq!(record.estimated_cost_czk, 2500);
        assert_eq!(record.pros, Vec::<String>::new());
        assert_eq!(record.cons, Vec::<String>::new());
        assert_eq!(record.device_info, None);
    }

    #[test]
    fn test_full_payload() {
        let raw = r#"{
            "problem_analyza": "Cracked display assembly.",
            "odhadovana_cena_kc": 3000,
            "klady_opravy": ["Keeps the device usable"],
            "zapory_opravy": ["Repair may not be economical"],
            "info_o_zarizeni": "Released 2021"
        }"#;
        let record = parse_analysis(raw).unwrap();
        assert_eq!(record.pros, vec!["Keeps the device usable"]);
        assert_eq!(record.cons, vec!["Repair may not be economical"]);
        assert_eq!(record.device_info.as_deref(), Some("Released 2021"));
    }

    #[test]
    fn test_fenced_payload_parses_identically_to_unfenced() {
        let fenced = "```json\n{\"problem_analyza\":\"X\",\"odhadovana_cena_kc\":100}\n```";
        let plain = r#"{"problem_analyza":"X","odhadovana_cena_kc":100}"#;
        assert_eq!(parse_analysis(fenced).unwrap(), parse_analysis(plain).unwrap());
    }

    #[test]
    fn test_fence_without_language_tag() {
        let fenced = "```\n{\"problem_analyza\":\"X\",\"odhadovana_cena_kc\":100}\n```";
        assert!(parse_analysis(fenced).is_ok());
    }

    #[test]
    fn test_missing_cost_is_malformed() {
        let err = parse_analysis(r#"{"problem_analyza":"X"}"#).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_diagnosis_is_malformed() {
        let err = parse_analysis(r#"{"odhadovana_cena_kc":100}"#).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_fractional_cost_is_malformed() {
        let err = parse_analysis(r#"{"problem_analyza":"X","odhadovana_cena_kc":2500.5}"#).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_negative_cost_is_malformed() {
        let err = parse_analysis(r#"{"problem_analyza":"X","odhadovana_cena_kc":-50}"#).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_cost_as_string_is_malformed() {
        let err = parse_analysis(r#"{"problem_analyza":"X","odhadovana_cena_kc":"2500"}"#).unwrap_err();
        assert!(matches!(err, AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_string_pros_are_malformed() {
        let raw = r#"{"problem_analyza":"X","odhadovana_cena_kc":100,"klady_opravy":[1,2]}"#;
        assert!(matches!(parse_analysis(raw).unwrap_err(), AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_pros_as_object_is_malformed() {
        let raw = r#"{"problem_analyza":"X","odhadovana_cena_kc":100,"zapory_opravy":{}}"#;
        assert!(matches!(parse_analysis(raw).unwrap_err(), AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_payload_is_malformed() {
        assert!(matches!(
            parse_analysis("The display is probably cracked.").unwrap_err(),
            AdvisorError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_json_array_payload_is_malformed() {
        assert!(matches!(parse_analysis("[1,2,3]").unwrap_err(), AdvisorError::MalformedResponse(_)));
    }

    #[test]
    fn test_strip_fence_leaves_plain_text_alone() {
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }
}
