//! Application state shared by all handlers.

use std::sync::Arc;

use crate::apps::AppRegistry;
use crate::config::Settings;
use crate::infra::{Database, UserStore};
use crate::services::{UserManager, UserService};

/// Application state (DI container).
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub settings: Arc<Settings>,
    pub apps: Arc<AppRegistry>,
}

impl AppState {
    /// Wire the SeaORM-backed services to a connected database.
    pub fn from_database(database: &Database, settings: Settings, apps: AppRegistry) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(users, settings.password_hasher));

        Self::new(user_service, settings, apps)
    }

    /// Create state with a manually injected user service.
    pub fn new(user_service: Arc<dyn UserService>, settings: Settings, apps: AppRegistry) -> Self {
        Self {
            user_service,
            settings: Arc::new(settings),
            apps: Arc::new(apps),
        }
    }
}
