use serde_json::json;

use crate::backend::ActionError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Maps the backend's closed error set onto envelope codes so callers can
/// branch on the kind instead of parsing a message.
pub fn action_err(id: &str, e: ActionError) -> serde_json::Value {
    match e {
        ActionError::Validation(m) => err(id, "bad_params", m, None),
        ActionError::NotFound(m) => err(id, "not_found", m, None),
        ActionError::Unavailable(m) => err(id, "backend_unavailable", m, None),
    }
}
