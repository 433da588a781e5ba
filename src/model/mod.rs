pub mod analytics;
pub mod contribution;
pub mod dashboard;
pub mod notification;
pub mod resource;
