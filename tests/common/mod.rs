//! Shared bootstrap for integration tests.
//!
//! Builds the test settings profile, an in-memory database with migrations
//! applied, and the application state wired to it.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use tower::ServiceExt;

use oll_crm::{
    api::create_router, infra::Database, logging, AppRegistry, AppState, Settings, User,
};

pub struct TestContext {
    pub settings: Settings,
    pub apps: AppRegistry,
    pub database: Database,
    pub state: AppState,
}

impl TestContext {
    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }
}

/// Set up a fresh context; every call gets its own in-memory database.
pub async fn setup() -> TestContext {
    let settings = Settings::for_tests();

    // Only the first test in a binary installs the subscriber
    let _ = logging::init(&settings.logging, false);

    let apps = AppRegistry::populate(&settings.installed_apps).expect("registry populates");
    let database = Database::connect(&settings.database)
        .await
        .expect("in-memory database connects");
    let state = AppState::from_database(&database, settings.clone(), apps.clone());

    TestContext {
        settings,
        apps,
        database,
        state,
    }
}

/// Create a regular user through the service layer.
pub async fn create_user(ctx: &TestContext, username: &str, email: &str, password: &str) -> User {
    ctx.state
        .user_service
        .create_user(username.into(), email.into(), password.into())
        .await
        .expect("user is created")
}

/// Send a request with an optional JSON body.
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    router
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Parse a response body as JSON.
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("expected JSON body: {e}"))
}
