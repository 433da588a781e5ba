//! The action boundary between the stores/IPC surface and whatever actually
//! holds the data. Two implementations: a stub that fabricates results the
//! way the pre-backend application did, and a SQLite-backed one that a
//! selected workspace swaps in. Callers depend only on the trait.

pub mod sqlite;
pub mod stub;

use std::fmt;

use crate::model::analytics::{CoursePerformance, PerformanceInsight, StudySuggestion};
use crate::model::contribution::{Contribution, ContributionPatch, NewContribution};
use crate::model::dashboard::StudentDashboard;
use crate::model::notification::{NewNotification, NewReminder, Notification, Reminder};
use crate::model::resource::{NewResource, Resource, ResourceFilter, ResourceRating};

pub use sqlite::SqliteBackend;
pub use stub::StubBackend;

/// Closed failure set; the IPC layer maps each variant to an envelope code so
/// callers can react differently instead of pattern-matching a message.
#[derive(Debug)]
pub enum ActionError {
    Validation(String),
    NotFound(String),
    Unavailable(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::Validation(m) => write!(f, "validation failed: {m}"),
            ActionError::NotFound(m) => write!(f, "not found: {m}"),
            ActionError::Unavailable(m) => write!(f, "backend unavailable: {m}"),
        }
    }
}

impl std::error::Error for ActionError {}

impl From<rusqlite::Error> for ActionError {
    fn from(e: rusqlite::Error) -> Self {
        ActionError::Unavailable(e.to_string())
    }
}

pub type ActionResult<T> = Result<T, ActionError>;

pub trait Backend {
    fn fetch_resources(&self, filter: &ResourceFilter) -> ActionResult<Vec<Resource>>;
    fn upload_resource(&mut self, input: NewResource) -> ActionResult<Resource>;
    fn delete_resource(&mut self, resource_id: &str) -> ActionResult<()>;
    fn rate_resource(&mut self, resource_id: &str, rating: ResourceRating) -> ActionResult<()>;

    fn submit_contribution(&mut self, input: NewContribution) -> ActionResult<Contribution>;
    fn fetch_my_contributions(&self, user_id: &str) -> ActionResult<Vec<Contribution>>;
    fn update_contribution(
        &mut self,
        contribution_id: &str,
        patch: &ContributionPatch,
    ) -> ActionResult<()>;
    fn upvote_contribution(&mut self, contribution_id: &str) -> ActionResult<()>;

    fn fetch_notifications(&self, student_id: &str) -> ActionResult<Vec<Notification>>;
    fn add_notification(&mut self, input: NewNotification) -> ActionResult<Notification>;
    fn mark_notification_read(&mut self, notification_id: &str) -> ActionResult<()>;
    fn delete_notification(&mut self, notification_id: &str) -> ActionResult<()>;

    fn create_reminder(&mut self, input: NewReminder) -> ActionResult<Reminder>;
    fn fetch_reminders(&self, student_id: &str) -> ActionResult<Vec<Reminder>>;
    fn complete_reminder(&mut self, reminder_id: &str) -> ActionResult<()>;
    fn delete_reminder(&mut self, reminder_id: &str) -> ActionResult<()>;

    fn fetch_performance(&self, student_id: &str) -> ActionResult<Vec<CoursePerformance>>;
    fn fetch_insights(&self, student_id: &str) -> ActionResult<Vec<PerformanceInsight>>;
    fn fetch_study_suggestions(
        &self,
        student_id: &str,
        course_id: Option<&str>,
    ) -> ActionResult<Vec<StudySuggestion>>;

    fn fetch_dashboard(&self, student_id: &str) -> ActionResult<StudentDashboard>;
    fn update_dashboard_preferences(
        &mut self,
        student_id: &str,
        preferences: serde_json::Value,
    ) -> ActionResult<()>;
}

/// RFC 3339 UTC stamp used for every server-side timestamp.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}
