//! HTTP endpoint tests against the full router and an in-memory database.

mod common;

use axum::http::{header, Method, StatusCode};
use serde_json::json;

use oll_crm::config::PasswordHasher;
use oll_crm::infra::{UserRepository, UserStore};
use oll_crm::{AppError, Password, User};

// =============================================================================
// Health and info endpoints
// =============================================================================

#[tokio::test]
async fn test_health_check_payload() {
    let ctx = common::setup().await;

    let response = common::send(ctx.router(), Method::GET, "/health/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(
        body,
        json!({
            "status": "healthy",
            "message": "OLL CRM API is running",
            "version": "1.0.0"
        })
    );
}

#[tokio::test]
async fn test_api_info_payload() {
    let ctx = common::setup().await;

    let response = common::send(ctx.router(), Method::GET, "/api-info/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(
        body,
        json!({
            "name": "OLL Sales CRM API",
            "version": "1.0.0",
            "description": "Customer Relationship Management API",
            "endpoints": {
                "health": "/health/",
                "admin": "/admin/",
                "api": "/api/"
            }
        })
    );
}

#[tokio::test]
async fn test_info_endpoints_reject_post() {
    let ctx = common::setup().await;

    for uri in ["/health/", "/api-info/"] {
        let response = common::send(ctx.router(), Method::POST, uri, None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
        assert!(response.headers().contains_key(header::ALLOW));
    }
}

#[tokio::test]
async fn test_unslashed_paths_redirect() {
    let ctx = common::setup().await;

    let response = common::send(ctx.router(), Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/health/");
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let ctx = common::setup().await;

    let response = common::send(ctx.router(), Method::GET, "/reports/unknown/", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = common::json_body(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let ctx = common::setup().await;

    let response = common::send(ctx.router(), Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::json_body(response).await;
    assert_eq!(body["info"]["title"], "OLL Sales CRM API");
    assert!(body["paths"].get("/health/").is_some());
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_user_creation() {
    let ctx = common::setup().await;
    let user = common::create_user(&ctx, "testuser", "test@example.com", "testpass123").await;

    assert_eq!(user.username, "testuser");
    assert_eq!(user.email, "test@example.com");
    assert!(user.check_password("testpass123"));
    assert!(!user.check_password("testpass124"));
}

#[tokio::test]
async fn test_user_persisted_and_reloaded() {
    let ctx = common::setup().await;
    let created = common::create_user(&ctx, "persisted", "p@example.com", "testpass123").await;

    let loaded = ctx.state.user_service.get_user(created.id).await.unwrap();
    assert_eq!(loaded.username, "persisted");
    assert!(loaded.check_password("testpass123"));
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let ctx = common::setup().await;
    common::create_user(&ctx, "dupe", "one@example.com", "testpass123").await;

    let result = ctx
        .state
        .user_service
        .create_user("dupe".into(), "two@example.com".into(), "testpass123".into())
        .await;
    assert!(matches!(result, Err(oll_crm::AppError::Conflict(_))));
}

#[tokio::test]
async fn test_unique_key_clash_on_insert_is_conflict() {
    let ctx = common::setup().await;
    common::create_user(&ctx, "racer", "first@example.com", "testpass123").await;

    // Skips the service's lookup, as a concurrent insert would
    let store = UserStore::new(ctx.database.get_connection());
    let password = Password::with_hasher("testpass123", PasswordHasher::Argon2Fast).unwrap();
    let duplicate = User::new("racer".into(), "second@example.com", password);

    let result = store.insert(duplicate).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_authenticate_username_containing_at() {
    let ctx = common::setup().await;
    ctx.state
        .user_service
        .create_superuser(
            "admin@corp".into(),
            "ops@example.com".into(),
            "adminpass123".into(),
        )
        .await
        .unwrap();

    let user = ctx
        .state
        .user_service
        .authenticate("admin@corp".into(), "adminpass123".into())
        .await
        .unwrap();
    assert_eq!(user.email, "ops@example.com");
    assert!(user.last_login.is_some());
}

// =============================================================================
// Auth endpoints
// =============================================================================

#[tokio::test]
async fn test_signup_then_login() {
    let ctx = common::setup().await;

    let response = common::send(
        ctx.router(),
        Method::POST,
        "/api/auth/signup",
        Some(json!({
            "name": "Jane Smith",
            "email": "jane@example.com",
            "password": "password456"
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = common::json_body(response).await;
    assert_eq!(created["email"], "jane@example.com");
    assert_eq!(created["name"], "Jane Smith");
    assert!(created.get("password_hash").is_none());

    let response = common::send(
        ctx.router(),
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "jane@example.com", "password": "password456" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let logged_in = common::json_body(response).await;
    assert_eq!(logged_in["id"], created["id"]);
}

#[tokio::test]
async fn test_signup_existing_email_conflicts() {
    let ctx = common::setup().await;
    common::create_user(&ctx, "john", "john@example.com", "password123").await;

    let response = common::send(
        ctx.router(),
        Method::POST,
        "/api/auth/signup",
        Some(json!({
            "name": "John Again",
            "email": "john@example.com",
            "password": "password123"
        })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = common::json_body(response).await;
    assert_eq!(body["error"]["message"], "User already exists with this email");
}

#[tokio::test]
async fn test_signup_validation_errors() {
    let ctx = common::setup().await;

    let response = common::send(
        ctx.router(),
        Method::POST,
        "/api/auth/signup",
        Some(json!({ "name": "", "email": "not-an-email", "password": "short" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::json_body(response).await;
    assert_eq!(
        body["error"]["message"],
        "Invalid email format, Name is required, Password must be at least 8 characters"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let ctx = common::setup().await;
    common::create_user(&ctx, "john", "john@example.com", "password123").await;

    let response = common::send(
        ctx.router(),
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "john@example.com", "password": "password456" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = common::json_body(response).await;
    assert_eq!(body["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_malformed_body() {
    let ctx = common::setup().await;

    let response = common::send(
        ctx.router(),
        Method::POST,
        "/api/auth/login",
        Some(json!({ "email": "john@example.com" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::json_body(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}
