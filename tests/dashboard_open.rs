
use chrono::{Duration, SecondsFormat, Utc};
use serde_json::json;
use test_support::{request_ok, spawn_sidecar, temp_dir};

fn in_days(days: i64) -> String {
    (Utc::now() + Duration::days(days)).to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn reminder(title: &str, course_id: &str, due_date: &str) -> serde_json::Value {
    json!({ "reminder": {
        "studentId": "s1",
        "courseId": course_id,
        "courseName": course_id.to_uppercase(),
        "title": title,
        "description": "",
        "dueDate": due_date,
        "reminderDate": due_date,
        "type": "assignment"
    }})
}

#[test]
fn stub_dashboard_is_a_zeroed_aggregate() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let opened = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "dashboard.open",
        json!({ "studentId": "s1" }),
    );
    let dash = opened.get("dashboard").expect("dashboard");
    assert_eq!(dash.get("studentId").and_then(|v| v.as_str()), Some("s1"));
    let metrics = dash.get("metrics").expect("metrics");
    assert_eq!(metrics.get("activeReminders").and_then(|v| v.as_i64()), Some(0));
    assert_eq!(metrics.get("completionRate").and_then(|v| v.as_f64()), Some(0.0));
    assert_eq!(
        dash.get("courseOverviews").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );
    assert_eq!(
        dash.get("upcomingDeadlines").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn workspace_dashboard_aggregates_reminders_and_notifications() {
    let workspace = temp_dir("acadesk-dashboard");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let soon = in_days(1);
    let later = in_days(30);
    let created = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "reminders.create",
        reminder("lab due", "cs101", &soon),
    );
    let done_id = created
        .get("reminder")
        .and_then(|v| v.get("id"))
        .and_then(|v| v.as_str())
        .expect("id")
        .to_string();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "reminders.create",
        reminder("project draft", "ma201", &later),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "reminders.complete",
        json!({ "reminderId": done_id }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "notifications.add",
        json!({ "notification": {
            "studentId": "s1",
            "type": "deadline",
            "title": "project draft due",
            "message": "thirty days left"
        }}),
    );

    let opened = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "dashboard.open",
        json!({ "studentId": "s1" }),
    );
    let dash = opened.get("dashboard").expect("dashboard");
    let metrics = dash.get("metrics").expect("metrics");
    assert_eq!(metrics.get("activeReminders").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(metrics.get("coursesEnrolled").and_then(|v| v.as_i64()), Some(2));
    assert_eq!(
        metrics.get("upcomingDeadlines").and_then(|v| v.as_i64()),
        Some(1)
    );
    let completion = metrics
        .get("completionRate")
        .and_then(|v| v.as_f64())
        .expect("completionRate");
    assert!((completion - 50.0).abs() < 1e-9);

    let upcoming = dash
        .get("upcomingDeadlines")
        .and_then(|v| v.as_array())
        .expect("upcoming");
    assert_eq!(upcoming.len(), 1);
    assert_eq!(
        upcoming[0].get("title").and_then(|v| v.as_str()),
        Some("project draft")
    );
    assert_eq!(upcoming[0].get("priority").and_then(|v| v.as_str()), Some("low"));

    assert_eq!(dash.get("notificationCount").and_then(|v| v.as_i64()), Some(1));
    assert_eq!(
        dash.get("unreadNotifications").and_then(|v| v.as_i64()),
        Some(1)
    );
    // Analytic surfaces stay empty: nothing computes them.
    assert_eq!(
        dash.get("performanceTrends").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );
    assert_eq!(
        dash.get("recommendations").and_then(|v| v.as_array()).map(Vec::len),
        Some(0)
    );

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
