//! Validation and normalization of raw analysis responses.
//!
//! The model is asked for strict JSON, but the shape still gets checked
//! before anything reaches the report type: the two load-bearing sections
//! must be present and non-null, an empty rewrite collapses to null, and
//! the list fields are always materialized as lists.

use serde_json::Value;
use trustai_core::report::ReportData;
use trustai_core::{Result, TrustAiError};

/// Parses and normalizes a raw model response into a report.
///
/// # Errors
///
/// Returns `Analysis` errors: the JSON parse failure verbatim, or
/// `Invalid response format from AI model.` when the shape check fails.
pub fn parse_report_response(raw: &str) -> Result<ReportData> {
    let mut value: Value =
        serde_json::from_str(raw.trim()).map_err(|e| TrustAiError::analysis(e.to_string()))?;

    let has_required_sections = ["credibility", "summary"]
        .iter()
        .all(|key| value.get(*key).map(|v| !v.is_null()).unwrap_or(false));
    if !has_required_sections {
        return Err(TrustAiError::analysis(
            "Invalid response format from AI model.",
        ));
    }

    normalize(&mut value);

    serde_json::from_value(value).map_err(|e| TrustAiError::analysis(e.to_string()))
}

fn normalize(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };

    // An empty rewrite means "nothing to rewrite"
    if let Some(Value::String(s)) = obj.get("rewritten_text") {
        if s.is_empty() {
            obj.insert("rewritten_text".to_string(), Value::Null);
        }
    }

    // List sections are always lists, even when the model omits or nulls them
    for key in ["fact_checks", "referenced_sources"] {
        let missing = obj.get(key).map(|v| v.is_null()).unwrap_or(true);
        if missing {
            obj.insert(key.to_string(), Value::Array(Vec::new()));
        }
    }
}
