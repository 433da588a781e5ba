use crate::model::dashboard::{DashboardPatch, StudentDashboard};

/// At most one aggregate. `set` replaces it wholesale; `merge` applies a
/// partial update and is a no-op while nothing has been loaded.
#[derive(Debug, Default)]
pub struct DashboardStore {
    dashboard: Option<StudentDashboard>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&StudentDashboard> {
        self.dashboard.as_ref()
    }

    pub fn set(&mut self, dashboard: StudentDashboard) {
        self.dashboard = Some(dashboard);
    }

    pub fn merge(&mut self, patch: DashboardPatch) {
        let Some(dash) = self.dashboard.as_mut() else {
            return;
        };
        if let Some(last_updated) = patch.last_updated {
            dash.last_updated = last_updated;
        }
        if let Some(metrics) = patch.metrics {
            dash.metrics = metrics;
        }
        if let Some(upcoming) = patch.upcoming_deadlines {
            dash.upcoming_deadlines = upcoming;
        }
        if let Some(count) = patch.notification_count {
            dash.notification_count = count;
        }
        if let Some(unread) = patch.unread_notifications {
            dash.unread_notifications = unread;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_without_a_loaded_dashboard_is_a_no_op() {
        let mut store = DashboardStore::new();
        store.merge(DashboardPatch {
            unread_notifications: Some(3),
            ..DashboardPatch::default()
        });
        assert!(store.get().is_none());
    }

    #[test]
    fn merge_overwrites_only_supplied_fields() {
        let mut store = DashboardStore::new();
        store.set(StudentDashboard::empty("s1", "2026-01-01T00:00:00Z"));
        store.merge(DashboardPatch {
            notification_count: Some(4),
            unread_notifications: Some(2),
            ..DashboardPatch::default()
        });

        let dash = store.get().expect("dashboard");
        assert_eq!(dash.notification_count, 4);
        assert_eq!(dash.unread_notifications, 2);
        assert_eq!(dash.student_id, "s1");
        assert_eq!(dash.last_updated, "2026-01-01T00:00:00Z");
    }

    #[test]
    fn set_replaces_wholesale() {
        let mut store = DashboardStore::new();
        store.set(StudentDashboard::empty("s1", "2026-01-01T00:00:00Z"));
        store.set(StudentDashboard::empty("s2", "2026-01-02T00:00:00Z"));
        assert_eq!(store.get().expect("dashboard").student_id, "s2");
    }
}
