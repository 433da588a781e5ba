//! Workspace-backed implementation. Ids and timestamps are assigned here the
//! same way the stub assigns them, so callers cannot tell the backends apart
//! by shape. Analytics operations stay empty: nothing in this daemon computes
//! performance predictions or insights.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use uuid::Uuid;

use super::{now_rfc3339, ActionError, ActionResult, Backend};
use crate::model::analytics::{CoursePerformance, PerformanceInsight, StudySuggestion};
use crate::model::contribution::{
    Contribution, ContributionPatch, ContributionStatus, ContributionType, NewContribution,
};
use crate::model::dashboard::{DashboardMetrics, DueItem, StudentDashboard};
use crate::model::notification::{
    NewNotification, NewReminder, Notification, NotificationType, Priority, Reminder, ReminderType,
};
use crate::model::resource::{NewResource, Resource, ResourceFilter, ResourceRating, ResourceType};
use crate::store::resources::matches_filter;

pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn new(conn: Connection) -> Self {
        SqliteBackend { conn }
    }
}

fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

fn encode_tags(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

fn decode_tags(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn row_to_resource(row: &rusqlite::Row<'_>) -> rusqlite::Result<Resource> {
    let kind: String = row.get(5)?;
    let tags: String = row.get(10)?;
    Ok(Resource {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        course_id: row.get(3)?,
        course_name: row.get(4)?,
        kind: ResourceType::parse(&kind).unwrap_or(ResourceType::Other),
        uploaded_by: row.get(6)?,
        uploaded_at: row.get(7)?,
        file_url: row.get(8)?,
        file_size: row.get(9)?,
        tags: decode_tags(&tags),
        downloads: row.get(11)?,
        rating: row.get(12)?,
        reviews: None,
        is_public: row.get::<_, i64>(13)? != 0,
        credits: row.get(14)?,
    })
}

const RESOURCE_COLS: &str = "id, title, description, course_id, course_name, kind, uploaded_by, \
     uploaded_at, file_url, file_size, tags, downloads, rating, is_public, credits";

fn row_to_contribution(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contribution> {
    let kind: String = row.get(8)?;
    let tags: String = row.get(12)?;
    let status: String = row.get(15)?;
    Ok(Contribution {
        id: row.get(0)?,
        user_id: row.get(1)?,
        user_name: row.get(2)?,
        user_email: row.get(3)?,
        course_id: row.get(4)?,
        course_name: row.get(5)?,
        title: row.get(6)?,
        description: row.get(7)?,
        kind: ContributionType::parse(&kind).unwrap_or(ContributionType::Other),
        resource_id: row.get(9)?,
        content: row.get(10)?,
        file_url: row.get(11)?,
        tags: decode_tags(&tags),
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
        status: ContributionStatus::parse(&status).unwrap_or(ContributionStatus::Pending),
        credits: row.get(16)?,
        views: row.get(17)?,
        downloads: row.get(18)?,
        upvotes: row.get(19)?,
        downvotes: row.get(20)?,
    })
}

const CONTRIBUTION_COLS: &str = "id, user_id, user_name, user_email, course_id, course_name, \
     title, description, kind, resource_id, content, file_url, tags, created_at, updated_at, \
     status, credits, views, downloads, upvotes, downvotes";

fn row_to_notification(row: &rusqlite::Row<'_>) -> rusqlite::Result<Notification> {
    let kind: String = row.get(2)?;
    let details: Option<String> = row.get(5)?;
    let priority: String = row.get(6)?;
    Ok(Notification {
        id: row.get(0)?,
        student_id: row.get(1)?,
        kind: NotificationType::parse(&kind).unwrap_or(NotificationType::CourseUpdate),
        title: row.get(3)?,
        message: row.get(4)?,
        details: details.and_then(|d| serde_json::from_str(&d).ok()),
        priority: Priority::parse(&priority).unwrap_or(Priority::Medium),
        read: row.get::<_, i64>(7)? != 0,
        read_at: row.get(8)?,
        created_at: row.get(9)?,
        action_url: row.get(10)?,
    })
}

const NOTIFICATION_COLS: &str = "id, student_id, kind, title, message, details, priority, \
     is_read, read_at, created_at, action_url";

fn row_to_reminder(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reminder> {
    let kind: String = row.get(8)?;
    Ok(Reminder {
        id: row.get(0)?,
        student_id: row.get(1)?,
        course_id: row.get(2)?,
        course_name: row.get(3)?,
        title: row.get(4)?,
        description: row.get(5)?,
        due_date: row.get(6)?,
        reminder_date: row.get(7)?,
        kind: ReminderType::parse(&kind).unwrap_or(ReminderType::Custom),
        completed: row.get::<_, i64>(9)? != 0,
        completed_at: row.get(10)?,
        created_at: row.get(11)?,
    })
}

const REMINDER_COLS: &str = "id, student_id, course_id, course_name, title, description, \
     due_date, reminder_date, kind, completed, completed_at, created_at";

impl SqliteBackend {
    fn exists(&self, table: &str, id: &str) -> ActionResult<bool> {
        let sql = format!("SELECT 1 FROM {table} WHERE id = ?");
        let found: Option<i64> = self
            .conn
            .query_row(&sql, [id], |r| r.get(0))
            .optional()
            .map_err(ActionError::from)?;
        Ok(found.is_some())
    }
}

impl Backend for SqliteBackend {
    fn fetch_resources(&self, filter: &ResourceFilter) -> ActionResult<Vec<Resource>> {
        // Narrow by the indexed columns in SQL; the remaining predicates
        // (tags, search) share the store's matcher so both layers agree.
        let mut sql = format!("SELECT {RESOURCE_COLS} FROM resources");
        let mut clauses: Vec<&str> = Vec::new();
        let mut binds: Vec<Value> = Vec::new();
        if let Some(course_id) = &filter.course_id {
            clauses.push("course_id = ?");
            binds.push(Value::Text(course_id.clone()));
        }
        if let Some(kind) = filter.kind {
            clauses.push("kind = ?");
            binds.push(Value::Text(kind.as_str().to_string()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY uploaded_at DESC");

        let mut stmt = self.conn.prepare(&sql).map_err(ActionError::from)?;
        let rows = stmt
            .query_map(params_from_iter(binds), row_to_resource)
            .and_then(|it| it.collect::<Result<Vec<_>, _>>())
            .map_err(ActionError::from)?;
        Ok(rows
            .into_iter()
            .filter(|r| matches_filter(filter, r))
            .collect())
    }

    fn upload_resource(&mut self, input: NewResource) -> ActionResult<Resource> {
        let uploaded_at = input.uploaded_at.clone().unwrap_or_else(now_rfc3339);
        let resource = Resource {
            id: prefixed_id("res"),
            title: input.title,
            description: input.description,
            course_id: input.course_id,
            course_name: input.course_name,
            kind: input.kind,
            uploaded_by: input.uploaded_by,
            uploaded_at,
            file_url: input.file_url,
            file_size: input.file_size,
            tags: input.tags,
            downloads: 0,
            rating: None,
            reviews: None,
            is_public: input.is_public,
            credits: input.credits,
        };
        self.conn
            .execute(
                "INSERT INTO resources(
                   id, title, description, course_id, course_name, kind, uploaded_by,
                   uploaded_at, file_url, file_size, tags, downloads, rating, is_public, credits
                 ) VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, NULL, ?, ?)",
                (
                    &resource.id,
                    &resource.title,
                    &resource.description,
                    &resource.course_id,
                    &resource.course_name,
                    resource.kind.as_str(),
                    &resource.uploaded_by,
                    &resource.uploaded_at,
                    resource.file_url.as_deref(),
                    resource.file_size,
                    encode_tags(&resource.tags),
                    if resource.is_public { 1 } else { 0 },
                    resource.credits,
                ),
            )
            .map_err(ActionError::from)?;
        Ok(resource)
    }

    fn delete_resource(&mut self, resource_id: &str) -> ActionResult<()> {
        if !self.exists("resources", resource_id)? {
            return Err(ActionError::NotFound("resource not found".to_string()));
        }
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(ActionError::from)?;
        tx.execute(
            "DELETE FROM resource_reviews WHERE resource_id = ?",
            [resource_id],
        )
        .map_err(ActionError::from)?;
        tx.execute("DELETE FROM resources WHERE id = ?", [resource_id])
            .map_err(ActionError::from)?;
        tx.commit().map_err(ActionError::from)?;
        Ok(())
    }

    fn rate_resource(&mut self, resource_id: &str, rating: ResourceRating) -> ActionResult<()> {
        if !(1.0..=5.0).contains(&rating.rating) {
            return Err(ActionError::Validation(
                "rating must be between 1 and 5".to_string(),
            ));
        }
        if !self.exists("resources", resource_id)? {
            return Err(ActionError::NotFound("resource not found".to_string()));
        }

        let review_id = prefixed_id("rev");
        self.conn
            .execute(
                "INSERT INTO resource_reviews(id, resource_id, user_id, user_name, rating, comment, created_at)
                 VALUES(?, ?, ?, ?, ?, ?, ?)",
                (
                    &review_id,
                    resource_id,
                    rating.user_id.as_deref().unwrap_or(""),
                    rating.user_name.as_deref().unwrap_or(""),
                    rating.rating,
                    rating.comment.as_deref().unwrap_or(""),
                    now_rfc3339(),
                ),
            )
            .map_err(ActionError::from)?;

        // The stored rating is always the review average, recomputed rather
        // than nudged, so it cannot drift.
        self.conn
            .execute(
                "UPDATE resources
                 SET rating = (SELECT AVG(rating) FROM resource_reviews WHERE resource_id = ?)
                 WHERE id = ?",
                (resource_id, resource_id),
            )
            .map_err(ActionError::from)?;
        Ok(())
    }

    fn submit_contribution(&mut self, input: NewContribution) -> ActionResult<Contribution> {
        let now = now_rfc3339();
        let contribution = Contribution {
            id: prefixed_id("contrib"),
            user_id: input.user_id,
            user_name: input.user_name,
            user_email: input.user_email,
            course_id: input.course_id,
            course_name: input.course_name,
            title: input.title,
            description: input.description,
            kind: input.kind,
            resource_id: input.resource_id,
            content: input.content,
            file_url: input.file_url,
            tags: input.tags,
            created_at: now.clone(),
            updated_at: now,
            status: ContributionStatus::Pending,
            credits: input.credits,
            views: 0,
            downloads: 0,
            upvotes: 0,
            downvotes: 0,
        };
        self.conn
            .execute(
                "INSERT INTO contributions(
                   id, user_id, user_name, user_email, course_id, course_name, title,
                   description, kind, resource_id, content, file_url, tags, created_at,
                   updated_at, status, credits, views, downloads, upvotes, downvotes
                 ) VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, 0, 0, 0)",
                params![
                    &contribution.id,
                    &contribution.user_id,
                    &contribution.user_name,
                    &contribution.user_email,
                    &contribution.course_id,
                    &contribution.course_name,
                    &contribution.title,
                    &contribution.description,
                    contribution.kind.as_str(),
                    contribution.resource_id.as_deref(),
                    contribution.content.as_deref(),
                    contribution.file_url.as_deref(),
                    encode_tags(&contribution.tags),
                    &contribution.created_at,
                    &contribution.updated_at,
                    contribution.status.as_str(),
                    contribution.credits,
                ],
            )
            .map_err(ActionError::from)?;
        Ok(contribution)
    }

    fn fetch_my_contributions(&self, user_id: &str) -> ActionResult<Vec<Contribution>> {
        let sql =
            format!("SELECT {CONTRIBUTION_COLS} FROM contributions WHERE user_id = ? ORDER BY created_at DESC");
        let mut stmt = self.conn.prepare(&sql).map_err(ActionError::from)?;
        stmt.query_map([user_id], row_to_contribution)
            .and_then(|it| it.collect::<Result<Vec<_>, _>>())
            .map_err(ActionError::from)
    }

    fn update_contribution(
        &mut self,
        contribution_id: &str,
        patch: &ContributionPatch,
    ) -> ActionResult<()> {
        if patch.is_empty() {
            return Err(ActionError::Validation(
                "patch must include at least one field".to_string(),
            ));
        }

        let mut set_parts: Vec<&str> = Vec::new();
        let mut binds: Vec<Value> = Vec::new();
        if let Some(title) = &patch.title {
            set_parts.push("title = ?");
            binds.push(Value::Text(title.clone()));
        }
        if let Some(description) = &patch.description {
            set_parts.push("description = ?");
            binds.push(Value::Text(description.clone()));
        }
        if let Some(content) = &patch.content {
            set_parts.push("content = ?");
            binds.push(Value::Text(content.clone()));
        }
        if let Some(tags) = &patch.tags {
            set_parts.push("tags = ?");
            binds.push(Value::Text(encode_tags(tags)));
        }
        if let Some(status) = patch.status {
            set_parts.push("status = ?");
            binds.push(Value::Text(status.as_str().to_string()));
        }
        if let Some(credits) = patch.credits {
            set_parts.push("credits = ?");
            binds.push(Value::Integer(credits));
        }
        set_parts.push("updated_at = ?");
        binds.push(Value::Text(now_rfc3339()));
        binds.push(Value::Text(contribution_id.to_string()));

        let sql = format!(
            "UPDATE contributions SET {} WHERE id = ?",
            set_parts.join(", ")
        );
        let changed = self
            .conn
            .execute(&sql, params_from_iter(binds))
            .map_err(ActionError::from)?;
        if changed == 0 {
            return Err(ActionError::NotFound("contribution not found".to_string()));
        }
        Ok(())
    }

    fn upvote_contribution(&mut self, contribution_id: &str) -> ActionResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE contributions SET upvotes = upvotes + 1 WHERE id = ?",
                [contribution_id],
            )
            .map_err(ActionError::from)?;
        if changed == 0 {
            return Err(ActionError::NotFound("contribution not found".to_string()));
        }
        Ok(())
    }

    fn fetch_notifications(&self, student_id: &str) -> ActionResult<Vec<Notification>> {
        let sql = format!(
            "SELECT {NOTIFICATION_COLS} FROM notifications WHERE student_id = ? ORDER BY created_at DESC"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(ActionError::from)?;
        stmt.query_map([student_id], row_to_notification)
            .and_then(|it| it.collect::<Result<Vec<_>, _>>())
            .map_err(ActionError::from)
    }

    fn add_notification(&mut self, input: NewNotification) -> ActionResult<Notification> {
        let notification = Notification {
            id: prefixed_id("notif"),
            student_id: input.student_id,
            kind: input.kind,
            title: input.title,
            message: input.message,
            details: input.details,
            priority: input.priority,
            read: false,
            read_at: None,
            created_at: now_rfc3339(),
            action_url: input.action_url,
        };
        let details = notification
            .details
            .as_ref()
            .map(|d| d.to_string());
        self.conn
            .execute(
                "INSERT INTO notifications(
                   id, student_id, kind, title, message, details, priority, is_read,
                   read_at, created_at, action_url
                 ) VALUES(?, ?, ?, ?, ?, ?, ?, 0, NULL, ?, ?)",
                (
                    &notification.id,
                    &notification.student_id,
                    notification.kind.as_str(),
                    &notification.title,
                    &notification.message,
                    details.as_deref(),
                    notification.priority.as_str(),
                    &notification.created_at,
                    notification.action_url.as_deref(),
                ),
            )
            .map_err(ActionError::from)?;
        Ok(notification)
    }

    fn mark_notification_read(&mut self, notification_id: &str) -> ActionResult<()> {
        // Only the first call stamps read_at; marking an already-read row is
        // accepted and changes nothing.
        let changed = self
            .conn
            .execute(
                "UPDATE notifications SET is_read = 1, read_at = ? WHERE id = ? AND is_read = 0",
                (now_rfc3339(), notification_id),
            )
            .map_err(ActionError::from)?;
        if changed == 0 && !self.exists("notifications", notification_id)? {
            return Err(ActionError::NotFound("notification not found".to_string()));
        }
        Ok(())
    }

    fn delete_notification(&mut self, notification_id: &str) -> ActionResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notifications WHERE id = ?", [notification_id])
            .map_err(ActionError::from)?;
        if changed == 0 {
            return Err(ActionError::NotFound("notification not found".to_string()));
        }
        Ok(())
    }

    fn create_reminder(&mut self, input: NewReminder) -> ActionResult<Reminder> {
        let reminder = Reminder {
            id: prefixed_id("rem"),
            student_id: input.student_id,
            course_id: input.course_id,
            course_name: input.course_name,
            title: input.title,
            description: input.description,
            due_date: input.due_date,
            reminder_date: input.reminder_date,
            kind: input.kind,
            completed: false,
            completed_at: None,
            created_at: now_rfc3339(),
        };
        self.conn
            .execute(
                "INSERT INTO reminders(
                   id, student_id, course_id, course_name, title, description, due_date,
                   reminder_date, kind, completed, completed_at, created_at
                 ) VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?, 0, NULL, ?)",
                (
                    &reminder.id,
                    &reminder.student_id,
                    &reminder.course_id,
                    &reminder.course_name,
                    &reminder.title,
                    &reminder.description,
                    &reminder.due_date,
                    &reminder.reminder_date,
                    reminder.kind.as_str(),
                    &reminder.created_at,
                ),
            )
            .map_err(ActionError::from)?;
        Ok(reminder)
    }

    fn fetch_reminders(&self, student_id: &str) -> ActionResult<Vec<Reminder>> {
        let sql = format!(
            "SELECT {REMINDER_COLS} FROM reminders WHERE student_id = ? ORDER BY due_date"
        );
        let mut stmt = self.conn.prepare(&sql).map_err(ActionError::from)?;
        stmt.query_map([student_id], row_to_reminder)
            .and_then(|it| it.collect::<Result<Vec<_>, _>>())
            .map_err(ActionError::from)
    }

    fn complete_reminder(&mut self, reminder_id: &str) -> ActionResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE reminders SET completed = 1, completed_at = ? WHERE id = ? AND completed = 0",
                (now_rfc3339(), reminder_id),
            )
            .map_err(ActionError::from)?;
        if changed == 0 && !self.exists("reminders", reminder_id)? {
            return Err(ActionError::NotFound("reminder not found".to_string()));
        }
        Ok(())
    }

    fn delete_reminder(&mut self, reminder_id: &str) -> ActionResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM reminders WHERE id = ?", [reminder_id])
            .map_err(ActionError::from)?;
        if changed == 0 {
            return Err(ActionError::NotFound("reminder not found".to_string()));
        }
        Ok(())
    }

    fn fetch_performance(&self, _student_id: &str) -> ActionResult<Vec<CoursePerformance>> {
        Ok(Vec::new())
    }

    fn fetch_insights(&self, _student_id: &str) -> ActionResult<Vec<PerformanceInsight>> {
        Ok(Vec::new())
    }

    fn fetch_study_suggestions(
        &self,
        _student_id: &str,
        _course_id: Option<&str>,
    ) -> ActionResult<Vec<StudySuggestion>> {
        Ok(Vec::new())
    }

    fn fetch_dashboard(&self, student_id: &str) -> ActionResult<StudentDashboard> {
        let now = now_rfc3339();
        let reminders = self.fetch_reminders(student_id)?;

        let total = reminders.len();
        let completed = reminders.iter().filter(|r| r.completed).count();
        let active = total - completed;
        let completion_rate = if total > 0 {
            100.0 * completed as f64 / total as f64
        } else {
            0.0
        };
        let courses_enrolled = {
            let mut courses: Vec<&str> =
                reminders.iter().map(|r| r.course_id.as_str()).collect();
            courses.sort_unstable();
            courses.dedup();
            courses.len() as i64
        };

        let now_ts = chrono::Utc::now();
        let mut upcoming: Vec<DueItem> = reminders
            .iter()
            .filter(|r| !r.completed)
            .filter_map(|r| {
                let due = chrono::DateTime::parse_from_rfc3339(&r.due_date).ok()?;
                if due < now_ts {
                    return None;
                }
                let hours_left = (due.with_timezone(&chrono::Utc) - now_ts).num_hours();
                let priority = if hours_left <= 48 {
                    "high"
                } else if hours_left <= 24 * 7 {
                    "medium"
                } else {
                    "low"
                };
                Some(DueItem {
                    id: r.id.clone(),
                    course_id: r.course_id.clone(),
                    course_name: r.course_name.clone(),
                    title: r.title.clone(),
                    due_date: r.due_date.clone(),
                    kind: r.kind.as_str().to_string(),
                    priority: priority.to_string(),
                })
            })
            .collect();
        upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));

        let (notification_count, unread_notifications): (i64, i64) = self
            .conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(CASE WHEN is_read = 0 THEN 1 ELSE 0 END), 0)
                 FROM notifications WHERE student_id = ?",
                [student_id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .map_err(ActionError::from)?;

        Ok(StudentDashboard {
            student_id: student_id.to_string(),
            last_updated: now,
            metrics: DashboardMetrics {
                overall_gpa: 0.0,
                average_attendance: 0.0,
                courses_enrolled,
                active_reminders: active as i64,
                upcoming_deadlines: upcoming.len() as i64,
                completion_rate,
            },
            course_overviews: Vec::new(),
            performance_trends: Vec::new(),
            recommendations: Vec::new(),
            upcoming_deadlines: upcoming,
            notification_count,
            unread_notifications,
        })
    }

    fn update_dashboard_preferences(
        &mut self,
        student_id: &str,
        preferences: serde_json::Value,
    ) -> ActionResult<()> {
        if !preferences.is_object() {
            return Err(ActionError::Validation(
                "preferences must be an object".to_string(),
            ));
        }
        self.conn
            .execute(
                "INSERT INTO dashboard_prefs(student_id, preferences, updated_at)
                 VALUES(?, ?, ?)
                 ON CONFLICT(student_id) DO UPDATE SET
                   preferences = excluded.preferences,
                   updated_at = excluded.updated_at",
                (student_id, preferences.to_string(), now_rfc3339()),
            )
            .map_err(ActionError::from)?;
        Ok(())
    }
}
