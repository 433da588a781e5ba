
use serde_json::json;
use test_support::{error_code, request_err, request_ok, spawn_sidecar};

fn upload_params(title: &str, course_id: &str, kind: &str) -> serde_json::Value {
    json!({ "resource": {
        "title": title,
        "description": format!("{title} description"),
        "courseId": course_id,
        "courseName": course_id.to_uppercase(),
        "type": kind,
        "uploadedBy": "u1",
        "tags": ["exam"]
    }})
}

#[test]
fn stub_upload_fabricates_prefixed_resource_and_session_store_serves_it() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    // The placeholder backend has nothing to list.
    let listed = request_ok(&mut stdin, &mut reader, "1", "resources.list", json!({}));
    assert_eq!(
        listed.get("resources").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );

    let uploaded = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "resources.upload",
        upload_params("Graph notes", "cs101", "notes"),
    );
    let resource = uploaded.get("resource").expect("resource");
    let id = resource.get("id").and_then(|v| v.as_str()).expect("id");
    assert!(id.starts_with("res_"), "unexpected id {id}");
    assert_eq!(resource.get("downloads").and_then(|v| v.as_i64()), Some(0));
    assert_eq!(resource.get("title").and_then(|v| v.as_str()), Some("Graph notes"));

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "resources.upload",
        upload_params("Algebra summary", "ma201", "summary"),
    );

    // Uploads live in the session store even though the stub persists
    // nothing, so search and filter operate on them.
    let found = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "resources.search",
        json!({ "query": "graph" }),
    );
    let resources = found.get("resources").and_then(|v| v.as_array()).expect("array");
    assert_eq!(resources.len(), 1);
    assert_eq!(
        resources[0].get("title").and_then(|v| v.as_str()),
        Some("Graph notes")
    );

    let all = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "resources.search",
        json!({ "query": "" }),
    );
    assert_eq!(
        all.get("resources").and_then(|v| v.as_array()).map(Vec::len),
        Some(2)
    );

    let filtered = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "resources.setFilter",
        json!({ "filter": { "courseId": "ma201", "type": "summary" } }),
    );
    let resources = filtered
        .get("resources")
        .and_then(|v| v.as_array())
        .expect("array");
    assert_eq!(resources.len(), 1);
    assert_eq!(
        resources[0].get("courseId").and_then(|v| v.as_str()),
        Some("ma201")
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn upload_and_rate_validate_their_params() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let missing_title = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "resources.upload",
        json!({ "resource": {
            "title": "   ",
            "description": "d",
            "courseId": "cs101",
            "courseName": "CS101",
            "type": "notes",
            "uploadedBy": "u1"
        }}),
    );
    assert_eq!(error_code(&missing_title), "bad_params");

    let bad_type = request_err(
        &mut stdin,
        &mut reader,
        "2",
        "resources.upload",
        json!({ "resource": {
            "title": "t",
            "description": "d",
            "courseId": "cs101",
            "courseName": "CS101",
            "type": "mixtape",
            "uploadedBy": "u1"
        }}),
    );
    assert_eq!(error_code(&bad_type), "bad_params");

    let out_of_range = request_err(
        &mut stdin,
        &mut reader,
        "3",
        "resources.rate",
        json!({ "resourceId": "res_x", "rating": 9.0 }),
    );
    assert_eq!(error_code(&out_of_range), "bad_params");

    let no_query = request_err(&mut stdin, &mut reader, "4", "resources.search", json!({}));
    assert_eq!(error_code(&no_query), "bad_params");

    drop(stdin);
    let _ = child.wait();
}
