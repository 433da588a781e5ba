use serde_json::json;

use crate::ipc::error::{action_err, err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::resource::{NewResource, ResourceFilter, ResourceRating};

fn filtered_json(state: &AppState) -> serde_json::Value {
    json!({
        "resources": state.resources.filtered(),
        "total": state.resources.resources().len(),
    })
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let filter = match req.params.get("filter") {
        Some(v) => match serde_json::from_value::<ResourceFilter>(v.clone()) {
            Ok(f) => f,
            Err(e) => return err(&req.id, "bad_params", format!("invalid filter: {e}"), None),
        },
        None => ResourceFilter::default(),
    };

    let resources = match state.backend.fetch_resources(&filter) {
        Ok(v) => v,
        Err(e) => return action_err(&req.id, e),
    };
    state.resources.set_resources(resources);
    state.resources.set_filter(filter);
    ok(&req.id, filtered_json(state))
}

fn handle_set_filter(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("filter") else {
        return err(&req.id, "bad_params", "missing filter", None);
    };
    let filter = match serde_json::from_value::<ResourceFilter>(raw.clone()) {
        Ok(f) => f,
        Err(e) => return err(&req.id, "bad_params", format!("invalid filter: {e}"), None),
    };
    state.resources.set_filter(filter);
    ok(&req.id, filtered_json(state))
}

fn handle_search(state: &mut AppState, req: &Request) -> serde_json::Value {
    // An empty query is valid and matches everything; a missing one is not.
    let query = match req.params.get("query").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing query", None),
    };
    state.resources.search(&query);
    ok(&req.id, filtered_json(state))
}

fn handle_upload(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("resource") else {
        return err(&req.id, "bad_params", "missing resource", None);
    };
    let input = match serde_json::from_value::<NewResource>(raw.clone()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "bad_params", format!("invalid resource: {e}"), None),
    };
    if input.title.trim().is_empty() {
        return err(&req.id, "bad_params", "title must not be empty", None);
    }
    if input.course_id.trim().is_empty() {
        return err(&req.id, "bad_params", "courseId must not be empty", None);
    }

    match state.backend.upload_resource(input) {
        Ok(resource) => {
            state.resources.add(resource.clone());
            ok(&req.id, json!({ "resource": resource }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_rate(state: &mut AppState, req: &Request) -> serde_json::Value {
    let resource_id = match req.params.get("resourceId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing resourceId", None),
    };
    let Some(rating_value) = req.params.get("rating").and_then(|v| v.as_f64()) else {
        return err(&req.id, "bad_params", "missing rating", None);
    };
    if !(1.0..=5.0).contains(&rating_value) {
        return err(&req.id, "bad_params", "rating must be between 1 and 5", None);
    }
    let rating = ResourceRating {
        rating: rating_value,
        comment: req
            .params
            .get("comment")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        user_id: req
            .params
            .get("userId")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        user_name: req
            .params
            .get("userName")
            .and_then(|v| v.as_str())
            .map(str::to_string),
    };

    match state.backend.rate_resource(&resource_id, rating) {
        Ok(()) => ok(&req.id, json!({ "ok": true })),
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let resource_id = match req.params.get("resourceId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing resourceId", None),
    };

    match state.backend.delete_resource(&resource_id) {
        Ok(()) => {
            state.resources.delete(&resource_id);
            ok(&req.id, json!({ "ok": true }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "resources.list" => Some(handle_list(state, req)),
        "resources.setFilter" => Some(handle_set_filter(state, req)),
        "resources.search" => Some(handle_search(state, req)),
        "resources.upload" => Some(handle_upload(state, req)),
        "resources.rate" => Some(handle_rate(state, req)),
        "resources.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
