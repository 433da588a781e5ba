pub mod analytics;
pub mod contributions;
pub mod core;
pub mod dashboard;
pub mod notifications;
pub mod reminders;
pub mod resources;
