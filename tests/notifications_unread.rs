
use serde_json::json;
use test_support::{error_code, request_err, request_ok, spawn_sidecar, temp_dir};

fn notification(student_id: &str, title: &str) -> serde_json::Value {
    json!({ "notification": {
        "studentId": student_id,
        "type": "deadline",
        "title": title,
        "message": "assignment due soon",
        "priority": "high"
    }})
}

#[test]
fn unread_count_tracks_reads_and_deletes() {
    let workspace = temp_dir("acadesk-notifications");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let added = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "notifications.add",
        notification("s1", "lab 2 due"),
    );
    let n1 = added
        .get("notification")
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_str())
        .expect("id")
        .to_string();
    assert_eq!(added.get("unreadCount").and_then(|v| v.as_i64()), Some(1));

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "notifications.add",
        notification("s1", "quiz graded"),
    );

    let listed = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "notifications.list",
        json!({ "studentId": "s1" }),
    );
    assert_eq!(listed.get("unreadCount").and_then(|v| v.as_i64()), Some(2));
    let notifications = listed
        .get("notifications")
        .and_then(|v| v.as_array())
        .expect("array");
    assert_eq!(notifications.len(), 2);
    assert!(notifications
        .iter()
        .all(|n| n.get("read") == Some(&json!(false))));

    let marked = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "notifications.markRead",
        json!({ "notificationId": n1 }),
    );
    assert_eq!(marked.get("unreadCount").and_then(|v| v.as_i64()), Some(1));

    // Marking again is a no-op, not a double decrement.
    let marked = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "notifications.markRead",
        json!({ "notificationId": n1 }),
    );
    assert_eq!(marked.get("unreadCount").and_then(|v| v.as_i64()), Some(1));

    let listed = request_ok(
        &mut stdin,
        &mut reader,
        "7",
        "notifications.list",
        json!({ "studentId": "s1" }),
    );
    let read_one = listed
        .get("notifications")
        .and_then(|v| v.as_array())
        .and_then(|arr| {
            arr.iter()
                .find(|n| n.get("id").and_then(|v| v.as_str()) == Some(n1.as_str()))
        })
        .expect("marked notification")
        .clone();
    assert_eq!(read_one.get("read"), Some(&json!(true)));
    assert!(read_one
        .get("readAt")
        .and_then(|v| v.as_str())
        .is_some());

    let missing = request_err(
        &mut stdin,
        &mut reader,
        "8",
        "notifications.markRead",
        json!({ "notificationId": "notif_missing" }),
    );
    assert_eq!(error_code(&missing), "not_found");

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "9",
        "notifications.delete",
        json!({ "notificationId": n1 }),
    );
    let listed = request_ok(
        &mut stdin,
        &mut reader,
        "10",
        "notifications.list",
        json!({ "studentId": "s1" }),
    );
    assert_eq!(
        listed
            .get("notifications")
            .and_then(|v| v.as_array())
            .map(Vec::len),
        Some(1)
    );
    assert_eq!(listed.get("unreadCount").and_then(|v| v.as_i64()), Some(1));

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn add_validates_student_and_title() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let no_student = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "notifications.add",
        json!({ "notification": {
            "studentId": "",
            "type": "exam",
            "title": "t",
            "message": "m"
        }}),
    );
    assert_eq!(error_code(&no_student), "bad_params");

    let bad_kind = request_err(
        &mut stdin,
        &mut reader,
        "2",
        "notifications.add",
        json!({ "notification": {
            "studentId": "s1",
            "type": "carrier_pigeon",
            "title": "t",
            "message": "m"
        }}),
    );
    assert_eq!(error_code(&bad_kind), "bad_params");

    drop(stdin);
    let _ = child.wait();
}
