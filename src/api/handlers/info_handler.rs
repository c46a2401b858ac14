//! Health check and API information handlers.
//!
//! Both endpoints are unauthenticated, GET-only and return fixed payloads.

use axum::{
    http::StatusCode,
    response::{Json, Redirect},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::config::{
    API_DESCRIPTION, API_NAME, API_VERSION, HEALTH_MESSAGE, HEALTH_STATUS_HEALTHY, PATH_ADMIN,
    PATH_API, PATH_API_INFO, PATH_HEALTH,
};

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "OLL CRM API is running")]
    pub message: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTH_STATUS_HEALTHY.to_string(),
            message: HEALTH_MESSAGE.to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

/// Map of top-level endpoints advertised by the info endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiEndpoints {
    #[schema(example = "/health/")]
    pub health: String,
    #[schema(example = "/admin/")]
    pub admin: String,
    #[schema(example = "/api/")]
    pub api: String,
}

/// API information response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiInfoResponse {
    #[schema(example = "OLL Sales CRM API")]
    pub name: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    #[schema(example = "Customer Relationship Management API")]
    pub description: String,
    pub endpoints: ApiEndpoints,
}

impl ApiInfoResponse {
    pub fn current() -> Self {
        Self {
            name: API_NAME.to_string(),
            version: API_VERSION.to_string(),
            description: API_DESCRIPTION.to_string(),
            endpoints: ApiEndpoints {
                health: PATH_HEALTH.to_string(),
                admin: PATH_ADMIN.to_string(),
                api: PATH_API.to_string(),
            },
        }
    }
}

/// Create health and info routes.
///
/// Unslashed paths redirect to the canonical slashed ones.
pub fn info_routes() -> Router<AppState> {
    Router::new()
        .route(PATH_HEALTH, get(health_check))
        .route(PATH_API_INFO, get(api_info))
        .route(
            PATH_HEALTH.trim_end_matches('/'),
            get(|| async { Redirect::permanent(PATH_HEALTH) }),
        )
        .route(
            PATH_API_INFO.trim_end_matches('/'),
            get(|| async { Redirect::permanent(PATH_API_INFO) }),
        )
}

/// Health check for load balancers and monitoring systems
#[utoipa::path(
    get,
    path = "/health/",
    tag = "System",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}

/// API information
#[utoipa::path(
    get,
    path = "/api-info/",
    tag = "System",
    responses(
        (status = 200, description = "API name, version and endpoint map", body = ApiInfoResponse)
    )
)]
pub async fn api_info() -> (StatusCode, Json<ApiInfoResponse>) {
    (StatusCode::OK, Json(ApiInfoResponse::current()))
}
