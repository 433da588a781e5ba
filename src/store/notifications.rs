use crate::model::notification::{Notification, Reminder};

/// Notifications and reminders for the signed-in student. The unread count is
/// derived on read; nothing increments or decrements a counter, so it cannot
/// drift from the collection.
#[derive(Debug, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    reminders: Vec<Reminder>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn set_notifications(&mut self, notifications: Vec<Notification>) {
        self.notifications = notifications;
    }

    pub fn set_reminders(&mut self, reminders: Vec<Reminder>) {
        self.reminders = reminders;
    }

    /// Newest first.
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications.insert(0, notification);
    }

    /// Flips the read flag and stamps `read_at` on the first call only;
    /// marking an already-read notification changes nothing. Returns false if
    /// the id is unknown.
    pub fn mark_read(&mut self, id: &str, now: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                if !n.read {
                    n.read = true;
                    n.read_at = Some(now.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub fn delete_notification(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn add_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }

    /// Completion is terminal: the flag and `completed_at` are set once and a
    /// repeat call is a no-op.
    pub fn complete_reminder(&mut self, id: &str, now: &str) -> bool {
        match self.reminders.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                if !r.completed {
                    r.completed = true;
                    r.completed_at = Some(now.to_string());
                }
                true
            }
            None => false,
        }
    }

    pub fn delete_reminder(&mut self, id: &str) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        self.reminders.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::notification::{NotificationType, Priority, ReminderType};

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            student_id: "s1".to_string(),
            kind: NotificationType::Deadline,
            title: "title".to_string(),
            message: "message".to_string(),
            details: None,
            priority: Priority::Medium,
            read,
            read_at: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            action_url: None,
        }
    }

    fn reminder(id: &str) -> Reminder {
        Reminder {
            id: id.to_string(),
            student_id: "s1".to_string(),
            course_id: "cs101".to_string(),
            course_name: "CS101".to_string(),
            title: "submit lab".to_string(),
            description: String::new(),
            due_date: "2026-02-01T00:00:00Z".to_string(),
            reminder_date: "2026-01-30T00:00:00Z".to_string(),
            kind: ReminderType::Assignment,
            completed: false,
            completed_at: None,
            created_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn unread_count_is_derived_from_the_collection() {
        let mut store = NotificationStore::new();
        store.set_notifications(vec![notification("n1", false), notification("n2", true)]);
        assert_eq!(store.unread_count(), 1);

        store.add_notification(notification("n3", false));
        assert_eq!(store.unread_count(), 2);

        store.delete_notification("n1");
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn mark_read_stamps_read_at_and_is_idempotent() {
        let mut store = NotificationStore::new();
        store.set_notifications(vec![notification("n1", false)]);
        assert_eq!(store.unread_count(), 1);

        assert!(store.mark_read("n1", "2026-01-02T00:00:00Z"));
        let n = &store.notifications()[0];
        assert!(n.read);
        assert_eq!(n.read_at.as_deref(), Some("2026-01-02T00:00:00Z"));
        assert_eq!(store.unread_count(), 0);

        // A second call must not re-stamp or push the count below zero.
        assert!(store.mark_read("n1", "2026-01-03T00:00:00Z"));
        let n = &store.notifications()[0];
        assert_eq!(n.read_at.as_deref(), Some("2026-01-02T00:00:00Z"));
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn mark_read_reports_unknown_ids() {
        let mut store = NotificationStore::new();
        assert!(!store.mark_read("missing", "2026-01-02T00:00:00Z"));
    }

    #[test]
    fn add_notification_prepends() {
        let mut store = NotificationStore::new();
        store.add_notification(notification("n1", false));
        store.add_notification(notification("n2", false));
        let ids: Vec<&str> = store.notifications().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n2", "n1"]);
    }

    #[test]
    fn complete_reminder_is_idempotent() {
        let mut store = NotificationStore::new();
        store.add_reminder(reminder("rem1"));

        assert!(store.complete_reminder("rem1", "2026-01-05T00:00:00Z"));
        let r = &store.reminders()[0];
        assert!(r.completed);
        assert_eq!(r.completed_at.as_deref(), Some("2026-01-05T00:00:00Z"));

        assert!(store.complete_reminder("rem1", "2026-01-06T00:00:00Z"));
        assert_eq!(
            store.reminders()[0].completed_at.as_deref(),
            Some("2026-01-05T00:00:00Z")
        );
    }

    #[test]
    fn delete_reminder_removes_by_id() {
        let mut store = NotificationStore::new();
        store.add_reminder(reminder("rem1"));
        store.add_reminder(reminder("rem2"));
        assert!(store.delete_reminder("rem1"));
        assert!(!store.delete_reminder("rem1"));
        assert_eq!(store.reminders().len(), 1);
    }
}
