//! Placeholder backend used before a workspace is selected. It behaves the
//! way the original server actions did: fetches return empty collections,
//! creates synthesize a prefixed id and echo the input, and every other
//! mutation succeeds without touching anything.

use uuid::Uuid;

use super::{now_rfc3339, ActionResult, Backend};
use crate::model::analytics::{CoursePerformance, PerformanceInsight, StudySuggestion};
use crate::model::contribution::{
    Contribution, ContributionPatch, ContributionStatus, NewContribution,
};
use crate::model::dashboard::StudentDashboard;
use crate::model::notification::{NewNotification, NewReminder, Notification, Reminder};
use crate::model::resource::{NewResource, Resource, ResourceFilter, ResourceRating};

#[derive(Debug, Default)]
pub struct StubBackend;

impl StubBackend {
    pub fn new() -> Self {
        StubBackend
    }
}

fn prefixed_id(prefix: &str) -> String {
    format!("{prefix}_{}", Uuid::new_v4().simple())
}

impl Backend for StubBackend {
    fn fetch_resources(&self, _filter: &ResourceFilter) -> ActionResult<Vec<Resource>> {
        Ok(Vec::new())
    }

    fn upload_resource(&mut self, input: NewResource) -> ActionResult<Resource> {
        let uploaded_at = input.uploaded_at.unwrap_or_else(now_rfc3339);
        Ok(Resource {
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
        })
    }

    fn delete_resource(&mut self, _resource_id: &str) -> ActionResult<()> {
        Ok(())
    }

    fn rate_resource(&mut self, _resource_id: &str, _rating: ResourceRating) -> ActionResult<()> {
        Ok(())
    }

    fn submit_contribution(&mut self, input: NewContribution) -> ActionResult<Contribution> {
        let now = now_rfc3339();
        Ok(Contribution {
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
        })
    }

    fn fetch_my_contributions(&self, _user_id: &str) -> ActionResult<Vec<Contribution>> {
        Ok(Vec::new())
    }

    fn update_contribution(
        &mut self,
        _contribution_id: &str,
        _patch: &ContributionPatch,
    ) -> ActionResult<()> {
        Ok(())
    }

    fn upvote_contribution(&mut self, _contribution_id: &str) -> ActionResult<()> {
        Ok(())
    }

    fn fetch_notifications(&self, _student_id: &str) -> ActionResult<Vec<Notification>> {
        Ok(Vec::new())
    }

    fn add_notification(&mut self, input: NewNotification) -> ActionResult<Notification> {
        Ok(Notification {
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
        })
    }

    fn mark_notification_read(&mut self, _notification_id: &str) -> ActionResult<()> {
        Ok(())
    }

    fn delete_notification(&mut self, _notification_id: &str) -> ActionResult<()> {
        Ok(())
    }

    fn create_reminder(&mut self, input: NewReminder) -> ActionResult<Reminder> {
        Ok(Reminder {
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
        })
    }

    fn fetch_reminders(&self, _student_id: &str) -> ActionResult<Vec<Reminder>> {
        Ok(Vec::new())
    }

    fn complete_reminder(&mut self, _reminder_id: &str) -> ActionResult<()> {
        Ok(())
    }

    fn delete_reminder(&mut self, _reminder_id: &str) -> ActionResult<()> {
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
        Ok(StudentDashboard::empty(student_id, &now_rfc3339()))
    }

    fn update_dashboard_preferences(
        &mut self,
        _student_id: &str,
        _preferences: serde_json::Value,
    ) -> ActionResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contribution::ContributionType;

    #[test]
    fn submit_contribution_assigns_prefixed_id_and_pending_status() {
        let mut backend = StubBackend::new();
        let c = backend
            .submit_contribution(NewContribution {
                user_id: "u1".to_string(),
                user_name: "User One".to_string(),
                user_email: "u1@example.edu".to_string(),
                course_id: "cs101".to_string(),
                course_name: "CS101".to_string(),
                title: "week 3 notes".to_string(),
                description: "graphs".to_string(),
                kind: ContributionType::Notes,
                resource_id: None,
                content: None,
                file_url: None,
                tags: Vec::new(),
                credits: 0,
            })
            .expect("submit");
        assert!(c.id.starts_with("contrib_"));
        assert_eq!(c.status, ContributionStatus::Pending);
        assert_eq!(c.created_at, c.updated_at);
    }

    #[test]
    fn fetches_return_empty_collections() {
        let backend = StubBackend::new();
        assert!(backend
            .fetch_resources(&ResourceFilter::default())
            .expect("fetch")
            .is_empty());
        assert!(backend.fetch_notifications("s1").expect("fetch").is_empty());
        assert!(backend.fetch_performance("s1").expect("fetch").is_empty());
    }

    #[test]
    fn stub_dashboard_is_zeroed() {
        let backend = StubBackend::new();
        let dash = backend.fetch_dashboard("s1").expect("dashboard");
        assert_eq!(dash.student_id, "s1");
        assert_eq!(dash.metrics.active_reminders, 0);
        assert!(dash.course_overviews.is_empty());
        assert!(dash.upcoming_deadlines.is_empty());
    }
}
