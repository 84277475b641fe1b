//! Strict parsing and validation of model responses

use crate::error::UnparseableError;
use crate::schema::ExtractionSchema;
use serde_json::Value;

/// Parse a model response as JSON and validate it against a schema
///
/// # Errors
///
/// Returns [`UnparseableError`] carrying the raw response and the failure
/// reason when the text is not JSON or violates the schema. Callers convert
/// this into the unparseable sentinel; it is never allowed to escape an
/// extraction run.
pub fn parse_structured(
    response: &str,
    schema: &ExtractionSchema,
) -> Result<Value, UnparseableError> {
    let unparseable = |reason: String| UnparseableError {
        reason,
        raw_response: response.to_string(),
    };

    let json_str = strip_code_fence(response);

    let value: Value = serde_json::from_str(&json_str)
        .map_err(|e| unparseable(format!("JSON parse error: {}", e)))?;

    schema
        .validate(&value)
        .map_err(|e| unparseable(format!("Schema violation: {}", e)))?;

    Ok(value)
}

/// Strip a Markdown code fence if the model wrapped its answer in one
///
/// Models sometimes emit ```json fences despite being told not to; the
/// content inside is still parsed strictly.
fn strip_code_fence(response: &str) -> String {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return trimmed.to_string();
        }

        // Skip first line (```json or ```) and the closing ``` line
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        lines[1..end].join("\n")
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use serde_json::json;

    fn name_schema() -> ExtractionSchema {
        ExtractionSchema::object(vec![Field::string("firstName"), Field::string("lastName")])
    }

    #[test]
    fn test_parse_valid_json() {
        let response = r#"{"firstName": "jane", "lastName": "doe"}"#;
        let value = parse_structured(response, &name_schema()).unwrap();
        assert_eq!(value, json!({"firstName": "jane", "lastName": "doe"}));
    }

    #[test]
    fn test_parse_json_with_markdown_wrapper() {
        let response = "```json\n{\"firstName\": \"jane\", \"lastName\": \"doe\"}\n```";
        let value = parse_structured(response, &name_schema()).unwrap();
        assert_eq!(value["firstName"], "jane");
    }

    #[test]
    fn test_parse_json_with_bare_fence() {
        let response = "```\n{\"firstName\": \"jane\", \"lastName\": \"doe\"}\n```";
        assert!(parse_structured(response, &name_schema()).is_ok());
    }

    #[test]
    fn test_parse_non_json_text() {
        let response = "I think the answer is Jane";
        let err = parse_structured(response, &name_schema()).unwrap_err();
        assert!(err.reason.contains("JSON parse error"));
        assert_eq!(err.raw_response, response);
    }

    #[test]
    fn test_parse_schema_violation() {
        let response = r#"{"firstName": "jane"}"#;
        let err = parse_structured(response, &name_schema()).unwrap_err();
        assert!(err.reason.contains("Schema violation"));
        assert!(err.reason.contains("lastName"));
    }

    #[test]
    fn test_parse_extra_field_rejected_not_dropped() {
        let response = r#"{"firstName": "jane", "lastName": "doe", "note": "from email"}"#;
        let err = parse_structured(response, &name_schema()).unwrap_err();
        assert!(err.reason.contains("unexpected field"));
    }

    #[test]
    fn test_parse_null_answer_is_unparseable() {
        // The model was told to answer null when it does not know; callers
        // see the sentinel rather than a fabricated value.
        let err = parse_structured("null", &name_schema()).unwrap_err();
        assert!(err.reason.contains("Schema violation"));
    }

    #[test]
    fn test_strip_code_fence_passthrough() {
        let plain = r#"{"key": "value"}"#;
        assert_eq!(strip_code_fence(plain), plain);
    }

    #[test]
    fn test_strip_code_fence_unterminated() {
        let response = "```json\n{\"firstName\": \"jane\", \"lastName\": \"doe\"}";
        assert!(parse_structured(response, &name_schema()).is_ok());
    }
}
