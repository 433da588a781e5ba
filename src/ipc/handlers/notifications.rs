use serde_json::json;

use crate::backend::now_rfc3339;
use crate::ipc::error::{action_err, err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::dashboard::DashboardPatch;
use crate::model::notification::NewNotification;

/// Keeps the dashboard badge in step with the notification store. A no-op
/// until a dashboard has been opened.
fn sync_dashboard_counts(state: &mut AppState) {
    let patch = DashboardPatch {
        notification_count: Some(state.notifications.notifications().len() as i64),
        unread_notifications: Some(state.notifications.unread_count() as i64),
        ..DashboardPatch::default()
    };
    state.dashboard.merge(patch);
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match req.params.get("studentId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing studentId", None),
    };

    match state.backend.fetch_notifications(&student_id) {
        Ok(notifications) => {
            state.notifications.set_notifications(notifications);
            sync_dashboard_counts(state);
            ok(
                &req.id,
                json!({
                    "notifications": state.notifications.notifications(),
                    "unreadCount": state.notifications.unread_count(),
                }),
            )
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("notification") else {
        return err(&req.id, "bad_params", "missing notification", None);
    };
    let input = match serde_json::from_value::<NewNotification>(raw.clone()) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("invalid notification: {e}"),
                None,
            )
        }
    };
    if input.student_id.trim().is_empty() {
        return err(&req.id, "bad_params", "studentId must not be empty", None);
    }
    if input.title.trim().is_empty() {
        return err(&req.id, "bad_params", "title must not be empty", None);
    }

    match state.backend.add_notification(input) {
        Ok(notification) => {
            state.notifications.add_notification(notification.clone());
            sync_dashboard_counts(state);
            ok(
                &req.id,
                json!({
                    "notification": notification,
                    "unreadCount": state.notifications.unread_count(),
                }),
            )
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_mark_read(state: &mut AppState, req: &Request) -> serde_json::Value {
    let notification_id = match req.params.get("notificationId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing notificationId", None),
    };

    match state.backend.mark_notification_read(&notification_id) {
        Ok(()) => {
            state.notifications.mark_read(&notification_id, &now_rfc3339());
            sync_dashboard_counts(state);
            ok(
                &req.id,
                json!({ "unreadCount": state.notifications.unread_count() }),
            )
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let notification_id = match req.params.get("notificationId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing notificationId", None),
    };

    match state.backend.delete_notification(&notification_id) {
        Ok(()) => {
            state.notifications.delete_notification(&notification_id);
            sync_dashboard_counts(state);
            ok(&req.id, json!({ "ok": true }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "notifications.list" => Some(handle_list(state, req)),
        "notifications.add" => Some(handle_add(state, req)),
        "notifications.markRead" => Some(handle_mark_read(state, req)),
        "notifications.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
