use crate::errors::FormatError;
use crate::model::StyleDelta;
use anyhow::Result;
use serde_json::Value;

/// Shape check for a requested style delta: any JSON object passes, anything
/// else fails. Field types are checked later by deserialization.
pub fn is_style_input(value: &Value) -> bool {
    value.is_object()
}

pub fn parse_style_delta(value: &Value) -> Result<StyleDelta> {
    if !is_style_input(value) {
        return Err(FormatError::InvalidInput(format!(
            "style changes must be a JSON object, got {}",
            json_kind(value)
        ))
        .into());
    }
    let delta: StyleDelta = serde_json::from_value(value.clone())
        .map_err(|e| FormatError::InvalidInput(e.to_string()))?;
    Ok(delta)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
