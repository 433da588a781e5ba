use serde_json::json;

use crate::ipc::error::{action_err, err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::contribution::{ContributionPatch, NewContribution};

fn handle_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("contribution") else {
        return err(&req.id, "bad_params", "missing contribution", None);
    };
    let input = match serde_json::from_value::<NewContribution>(raw.clone()) {
        Ok(v) => v,
        Err(e) => {
            return err(
                &req.id,
                "bad_params",
                format!("invalid contribution: {e}"),
                None,
            )
        }
    };
    if input.title.trim().is_empty() {
        return err(&req.id, "bad_params", "title must not be empty", None);
    }
    if input.user_id.trim().is_empty() {
        return err(&req.id, "bad_params", "userId must not be empty", None);
    }

    match state.backend.submit_contribution(input) {
        Ok(contribution) => {
            state.contributions.add(contribution.clone());
            state.contributions.add_mine(contribution.clone());
            ok(&req.id, json!({ "contribution": contribution }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_list_mine(state: &mut AppState, req: &Request) -> serde_json::Value {
    let user_id = match req.params.get("userId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing userId", None),
    };

    match state.backend.fetch_my_contributions(&user_id) {
        Ok(contributions) => {
            state.contributions.set_mine(contributions);
            ok(&req.id, json!({ "contributions": state.contributions.mine() }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let contribution_id = match req.params.get("contributionId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing contributionId", None),
    };
    let Some(raw) = req.params.get("patch") else {
        return err(&req.id, "bad_params", "missing patch", None);
    };
    let patch = match serde_json::from_value::<ContributionPatch>(raw.clone()) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "bad_params", format!("invalid patch: {e}"), None),
    };
    if patch.is_empty() {
        return err(
            &req.id,
            "bad_params",
            "patch must include at least one field",
            None,
        );
    }

    match state.backend.update_contribution(&contribution_id, &patch) {
        Ok(()) => {
            state.contributions.update(&contribution_id, &patch);
            ok(&req.id, json!({ "ok": true }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

fn handle_upvote(state: &mut AppState, req: &Request) -> serde_json::Value {
    let contribution_id = match req.params.get("contributionId").and_then(|v| v.as_str()) {
        Some(v) => v.to_string(),
        None => return err(&req.id, "bad_params", "missing contributionId", None),
    };

    match state.backend.upvote_contribution(&contribution_id) {
        Ok(()) => {
            state.contributions.bump_upvotes(&contribution_id);
            ok(&req.id, json!({ "ok": true }))
        }
        Err(e) => action_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "contributions.submit" => Some(handle_submit(state, req)),
        "contributions.listMine" => Some(handle_list_mine(state, req)),
        "contributions.update" => Some(handle_update(state, req)),
        "contributions.upvote" => Some(handle_upvote(state, req)),
        _ => None,
    }
}
