use std::path::PathBuf;

use serde::Deserialize;

use crate::backend::{Backend, StubBackend};
use crate::store::{ContributionStore, DashboardStore, NotificationStore, ResourceStore};

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Session state: one store per bounded context plus the active backend.
/// The daemon starts against the stub backend; selecting a workspace swaps
/// in the SQLite one without the stores or handlers noticing.
pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub backend: Box<dyn Backend>,
    pub resources: ResourceStore,
    pub contributions: ContributionStore,
    pub notifications: NotificationStore,
    pub dashboard: DashboardStore,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            workspace: None,
            backend: Box::new(StubBackend::new()),
            resources: ResourceStore::new(),
            contributions: ContributionStore::new(),
            notifications: NotificationStore::new(),
            dashboard: DashboardStore::new(),
        }
    }
}
