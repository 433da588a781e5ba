
use serde_json::json;
use test_support::{error_code, request_err, request_ok, spawn_sidecar, temp_dir};

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let workspace = temp_dir("acadesk-router-smoke");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let health = request_ok(&mut stdin, &mut reader, "1", "health", json!({}));
    assert!(health.get("version").and_then(|v| v.as_str()).is_some());
    assert!(health
        .get("workspacePath")
        .map(|v| v.is_null())
        .unwrap_or(true));

    // Stub mode: fetches are empty, creates fabricate ids.
    let listed = request_ok(&mut stdin, &mut reader, "2", "resources.list", json!({}));
    assert_eq!(
        listed.get("resources").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "resources.search",
        json!({ "query": "" }),
    );
    let uploaded = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "resources.upload",
        json!({ "resource": {
            "title": "Week 1 slides",
            "description": "intro lecture",
            "courseId": "cs101",
            "courseName": "Intro CS",
            "type": "lecture_material",
            "uploadedBy": "u1"
        }}),
    );
    let resource_id = uploaded
        .get("resource")
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_str())
        .expect("resource id")
        .to_string();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "resources.rate",
        json!({ "resourceId": resource_id, "rating": 4.0 }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "resources.delete",
        json!({ "resourceId": resource_id }),
    );

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "7",
        "contributions.submit",
        json!({ "contribution": {
            "userId": "u1",
            "userName": "User One",
            "userEmail": "u1@example.edu",
            "courseId": "cs101",
            "courseName": "Intro CS",
            "title": "week 1 notes",
            "description": "notes",
            "type": "notes"
        }}),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "8",
        "contributions.listMine",
        json!({ "userId": "u1" }),
    );

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "9",
        "notifications.list",
        json!({ "studentId": "s1" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "10",
        "reminders.list",
        json!({ "studentId": "s1" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "11",
        "analytics.performance",
        json!({ "studentId": "s1" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "12",
        "analytics.insights",
        json!({ "studentId": "s1" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "13",
        "analytics.suggestions",
        json!({ "studentId": "s1" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "14",
        "dashboard.open",
        json!({ "studentId": "s1" }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "15",
        "dashboard.updatePreferences",
        json!({ "studentId": "s1", "preferences": { "theme": "dark" } }),
    );

    // Same families keep working once a workspace backs them.
    let selected = request_ok(
        &mut stdin,
        &mut reader,
        "16",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    assert!(selected
        .get("workspacePath")
        .and_then(|v| v.as_str())
        .is_some());
    let _ = request_ok(&mut stdin, &mut reader, "17", "resources.list", json!({}));
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "18",
        "dashboard.open",
        json!({ "studentId": "s1" }),
    );

    let unknown = request_err(&mut stdin, &mut reader, "19", "seating.get", json!({}));
    assert_eq!(error_code(&unknown), "not_implemented");

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
