use serde_json::json;

use crate::ipc::error::{action_err, err, ok};
use crate::ipc::types::{AppState, Request};

fn handle_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match req.params.get("studentId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing studentId", None),
    };

    match state.backend.fetch_dashboard(&student_id) {
        Ok(dashboard) => {
            state.dashboard.set(dashboard);
            ok(&req.id, json!({ "dashboard": state.dashboard.get() }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_update_preferences(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match req.params.get("studentId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing studentId", None),
    };
    let Some(preferences) = req.params.get("preferences") else {
        return err(&req.id, "bad_params", "missing preferences", None);
    };
    if !preferences.is_object() {
        return err(&req.id, "bad_params", "preferences must be an object", None);
    }

    match state
        .backend
        .update_dashboard_preferences(&student_id, preferences.clone())
    {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => action_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.open" => Some(handle_open(state, req)),
        "dashboard.updatePreferences" => Some(handle_update_preferences(state, req)),
        _ => None,
    }
}
