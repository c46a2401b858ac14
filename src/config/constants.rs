//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// API metadata
// =============================================================================

/// Public API name reported by the info endpoint
pub const API_NAME: &str = "OLL Sales CRM API";

/// Public API version reported by the health and info endpoints
pub const API_VERSION: &str = "1.0.0";

/// Public API description
pub const API_DESCRIPTION: &str = "Customer Relationship Management API";

/// Health endpoint status value
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

/// Health endpoint message
pub const HEALTH_MESSAGE: &str = "OLL CRM API is running";

// =============================================================================
// Routes
// =============================================================================

pub const PATH_HEALTH: &str = "/health/";
pub const PATH_API_INFO: &str = "/api-info/";
pub const PATH_ADMIN: &str = "/admin/";
pub const PATH_API: &str = "/api/";

// =============================================================================
// Installed applications
// =============================================================================

pub const APP_ADMIN: &str = "contrib.admin";
pub const APP_AUTH: &str = "contrib.auth";
pub const APP_CONTENTTYPES: &str = "contrib.contenttypes";
pub const APP_SESSIONS: &str = "contrib.sessions";
pub const APP_MESSAGES: &str = "contrib.messages";
pub const APP_STATICFILES: &str = "contrib.staticfiles";
pub const APP_API: &str = "api";
pub const APP_REPORTS: &str = "reports";
pub const APP_TRAINING: &str = "training";

/// Default installed applications, in load order
pub const DEFAULT_INSTALLED_APPS: &[&str] = &[
    APP_ADMIN,
    APP_AUTH,
    APP_CONTENTTYPES,
    APP_SESSIONS,
    APP_MESSAGES,
    APP_STATICFILES,
    APP_API,
    APP_REPORTS,
    APP_TRAINING,
];

/// Applications the CRM cannot run without
pub const REQUIRED_APPS: &[&str] = DEFAULT_INSTALLED_APPS;

/// Project-local applications (not framework contrib apps)
pub const CUSTOM_APPS: &[&str] = &[APP_API, APP_REPORTS, APP_TRAINING];

// =============================================================================
// Static files
// =============================================================================

/// URL prefix for static assets
pub const DEFAULT_STATIC_URL: &str = "static/";

/// Directory static assets are collected into, relative to the base dir
pub const DEFAULT_STATIC_ROOT: &str = "staticfiles";

// =============================================================================
// Security
// =============================================================================

/// Insecure key used only by debug builds when SECRET_KEY is unset
pub const DEV_SECRET_KEY: &str = "dev-insecure-secret-key-change-me-before-deploying";

/// Keys shorter than this trigger a check warning outside debug mode
pub const MIN_SECRET_KEY_LENGTH: usize = 50;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length
pub const MAX_USERNAME_LENGTH: u64 = 150;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3?mode=rwc";

/// In-memory SQLite database used by test runs
pub const TEST_DATABASE_URL: &str = "sqlite::memory:";

// =============================================================================
// Logging
// =============================================================================

/// Directory (relative to the base dir) log files are written to
pub const LOGS_DIR_NAME: &str = "logs";

/// File handler log file name
pub const LOG_FILE_NAME: &str = "oll_crm.log";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log level used by test runs
pub const TEST_LOG_LEVEL: &str = "warn";

// =============================================================================
// Environment selection
// =============================================================================

/// Environment variable selecting the settings profile
pub const ENV_SELECTOR_VAR: &str = "OLL_CRM_ENV";
