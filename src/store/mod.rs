//! Session state containers. One instance of each lives in the daemon's
//! `AppState`; tests construct their own, so nothing here is process-global.
//! Derived views (the filtered resource list, the unread count) are computed
//! on read from the underlying collection, never tracked alongside it.

pub mod contributions;
pub mod dashboard;
pub mod notifications;
pub mod resources;

pub use contributions::ContributionStore;
pub use dashboard::DashboardStore;
pub use notifications::NotificationStore;
pub use resources::ResourceStore;
