use serde_json::json;

use crate::ipc::error::{action_err, err, ok};
use crate::ipc::types::{AppState, Request};

fn require_student_id(req: &Request) -> Result<String, serde_json::Value> {
    match req.params.get("studentId").and_then(|v| v.as_str()) {
        Some(v) => Ok(v.to_string()),
        None => Err(err(&req.id, "bad_params", "missing studentId", None)),
    }
}

fn handle_performance(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match require_student_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.backend.fetch_performance(&student_id) {
        Ok(performance) => ok(&req.id, json!({ "performance": performance })),
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_insights(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match require_student_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.backend.fetch_insights(&student_id) {
        Ok(insights) => ok(&req.id, json!({ "insights": insights })),
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_suggestions(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match require_student_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let course_id = req
        .params
        .get("courseId")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    match state
        .backend
        .fetch_study_suggestions(&student_id, course_id.as_deref())
    {
        Ok(suggestions) => ok(&req.id, json!({ "suggestions": suggestions })),
        Err(e) => action_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "analytics.performance" => Some(handle_performance(state, req)),
        "analytics.insights" => Some(handle_insights(state, req)),
        "analytics.suggestions" => Some(handle_suggestions(state, req)),
        _ => None,
    }
}
