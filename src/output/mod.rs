pub mod human;

use serde_json::{Value, json};

use crate::core::validate::FoodInputError;

/// Agent-facing envelope: every command prints exactly one of these.
pub fn success(command: &str, data: Value) -> Value {
    json!({
        "status": "ok",
        "command": command,
        "data": data,
        "error": null
    })
}

pub fn error(command: &str, code: &str, message: &str) -> Value {
    json!({
        "status": "error",
        "command": command,
        "data": null,
        "error": {
            "code": code,
            "message": message
        }
    })
}

/// Envelope for a rejected food form, keyed by the stable validation code.
pub fn validation_error(command: &str, err: &FoodInputError) -> Value {
    error(command, err.code(), &err.to_string())
}
