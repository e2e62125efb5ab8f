//! Parse model replies into field records

use crate::error::ExtractorError;
use pitchlens_domain::ExtractedRecord;
use serde_json::Value;

/// Strip markdown code-fence decoration from a reply.
///
/// Models sometimes wrap JSON in a ``` block, with or without a "json"
/// language tag. Backticks and surrounding whitespace are trimmed from both
/// ends and a leading tag is dropped, so the closing marker may sit on its own
/// line, be glued to the last payload line, or share a single line with the
/// whole payload. A reply without a fence is returned trimmed and otherwise
/// untouched.
pub fn strip_code_fence(reply: &str) -> String {
    let trimmed = reply.trim();

    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }

    let body = trimmed.trim_matches(|c: char| c == '`' || c.is_whitespace());
    let body = body.strip_prefix("json").unwrap_or(body);
    body.trim_start().to_string()
}

/// Parse a model reply into an [`ExtractedRecord`].
///
/// The reply is fence-stripped, then parsed as a JSON object of business
/// fields. String values are taken as-is; any other value type is coerced to
/// its compact JSON text. A reply that is not valid JSON, or whose top level
/// is not an object, is an error the caller handles non-fatally.
pub fn parse_record(reply: &str) -> Result<ExtractedRecord, ExtractorError> {
    let cleaned = strip_code_fence(reply);

    let json: Value = serde_json::from_str(&cleaned)?;

    let object = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    Ok(object
        .iter()
        .map(|(field, value)| (field.clone(), coerce_value(value)))
        .collect())
}

/// Render a JSON value as the record's string value
fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
