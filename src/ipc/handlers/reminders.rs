use serde_json::json;

use crate::backend::now_rfc3339;
use crate::ipc::error::{action_err, err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::notification::NewReminder;

fn handle_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("reminder") else {
        return err(&req.id, "bad_params", "missing reminder", None);
    };
    let input = match serde_json::from_value::<NewReminder>(raw.clone()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "bad_params", format!("invalid reminder: {e}"), None),
    };
    if input.student_id.trim().is_empty() {
        return err(&req.id, "bad_params", "studentId must not be empty", None);
    }
    if input.title.trim().is_empty() {
        return err(&req.id, "bad_params", "title must not be empty", None);
    }
    if chrono::DateTime::parse_from_rfc3339(&input.due_date).is_err() {
        return err(
            &req.id,
            "bad_params",
            "dueDate must be an RFC 3339 timestamp",
            None,
        );
    }

    match state.backend.create_reminder(input) {
        Ok(reminder) => {
            state.notifications.add_reminder(reminder.clone());
            ok(&req.id, json!({ "reminder": reminder }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match req.params.get("studentId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing studentId", None),
    };

    match state.backend.fetch_reminders(&student_id) {
        Ok(reminders) => {
            state.notifications.set_reminders(reminders);
            ok(&req.id, json!({ "reminders": state.notifications.reminders() }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_complete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let reminder_id = match req.params.get("reminderId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing reminderId", None),
    };

    match state.backend.complete_reminder(&reminder_id) {
        Ok(()) => {
            state.notifications.complete_reminder(&reminder_id, &now_rfc3339());
            ok(&req.id, json!({ "ok": true }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let reminder_id = match req.params.get("reminderId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing reminderId", None),
    };

    match state.backend.delete_reminder(&reminder_id) {
        Ok(()) => {
            state.notifications.delete_reminder(&reminder_id);
            ok(&req.id, json!({ "ok": true }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "reminders.create" => Some(handle_create(state, req)),
        "reminders.list" => Some(handle_list(state, req)),
        "reminders.complete" => Some(handle_complete(state, req)),
        "reminders.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
