// src/pipeline/validate.rs

//! Response shape validation.

use serde_json::Value;

use crate::error::{AppError, Result};

/// Check a raw API response and extract the homework list.
///
/// The list is returned unchanged, possibly empty. Per-record validation
/// happens later in `parse_status`.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let object = response.as_object().ok_or(AppError::ResponseNotObject)?;

    // Both keys are required, independently of each other.
    if !object.contains_key("homeworks") || !object.contains_key("current_date") {
        return Err(AppError::MissingResponseKeys);
    }

    let homeworks = object
        .get("homeworks")
        .and_then(Value::as_array)
        .ok_or(AppError::HomeworkListInvalid)?;

    Ok(homeworks)
}
