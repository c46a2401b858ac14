//! OpenAPI documentation configuration.
//!
//! Served through Swagger UI at `/swagger-ui`.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, info_handler};
use crate::domain::UserResponse;

/// OpenAPI documentation for the OLL Sales CRM API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OLL Sales CRM API",
        version = "1.0.0",
        description = "Customer Relationship Management API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        info_handler::health_check,
        info_handler::api_info,
        auth_handler::signup,
        auth_handler::login,
    ),
    components(
        schemas(
            UserResponse,
            info_handler::HealthResponse,
            info_handler::ApiInfoResponse,
            info_handler::ApiEndpoints,
            auth_handler::SignupRequest,
            auth_handler::LoginRequest,
        )
    ),
    tags(
        (name = "System", description = "Health and API information"),
        (name = "Authentication", description = "User signup and login")
    )
)]
pub struct ApiDoc;
