//! Application settings loaded from environment variables.
//!
//! `Settings::load` picks a profile: `Production` reads everything from the
//! environment, `Test` starts from the same values and swaps in an in-memory
//! database, quiet console-only logging and the fast password hasher.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_INSTALLED_APPS, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_STATIC_ROOT, DEFAULT_STATIC_URL, DEV_SECRET_KEY, ENV_SELECTOR_VAR,
    LOGS_DIR_NAME, LOG_FILE_NAME, TEST_DATABASE_URL, TEST_LOG_LEVEL,
};
use crate::errors::{AppError, AppResult};

/// Settings profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Environment {
    #[default]
    Production,
    Test,
}

impl Environment {
    /// Read the profile from `OLL_CRM_ENV`, defaulting to production.
    pub fn from_env() -> Self {
        match env::var(ENV_SELECTOR_VAR).ok().as_deref() {
            Some("test") | Some("testing") => Environment::Test,
            _ => Environment::Production,
        }
    }
}

/// Password hashing profile.
///
/// Both profiles emit PHC-format Argon2 hashes; verification reads the cost
/// parameters back from the hash, so either profile verifies the other's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PasswordHasher {
    #[default]
    Argon2,
    /// Minimal-cost Argon2 for test runs
    Argon2Fast,
}

impl PasswordHasher {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "argon2" => Some(PasswordHasher::Argon2),
            "argon2-fast" | "fast" => Some(PasswordHasher::Argon2Fast),
            _ => None,
        }
    }
}

/// Database connection settings
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

impl DatabaseSettings {
    /// Whether the URL points at a private in-memory SQLite database.
    pub fn is_in_memory(&self) -> bool {
        self.url.starts_with("sqlite") && self.url.contains(":memory:")
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let url = if self.is_in_memory() {
            self.url.as_str()
        } else {
            "[REDACTED]"
        };
        f.debug_struct("DatabaseSettings").field("url", &url).finish()
    }
}

/// Logging settings: a console handler and an optional file handler.
#[derive(Debug, Clone)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    pub console: bool,
    pub file: bool,
    pub dir: PathBuf,
    pub file_name: String,
}

impl LoggingSettings {
    /// Directory the file handler writes to.
    pub fn logs_dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the file handler's log file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Settings {
    secret_key: String,
    secret_key_defaulted: bool,
    pub debug: bool,
    pub testing: bool,
    pub environment: Environment,
    pub base_dir: PathBuf,
    pub installed_apps: Vec<String>,
    pub database: DatabaseSettings,
    pub static_url: String,
    pub static_root: PathBuf,
    pub logging: LoggingSettings,
    pub password_hasher: PasswordHasher,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("secret_key", &"[REDACTED]")
            .field("debug", &self.debug)
            .field("testing", &self.testing)
            .field("environment", &self.environment)
            .field("base_dir", &self.base_dir)
            .field("installed_apps", &self.installed_apps)
            .field("database", &self.database)
            .field("static_url", &self.static_url)
            .field("static_root", &self.static_root)
            .field("logging", &self.logging)
            .field("password_hasher", &self.password_hasher)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl Settings {
    /// Load the profile selected by `OLL_CRM_ENV`.
    pub fn from_env() -> AppResult<Self> {
        Self::load(Environment::from_env())
    }

    /// Load settings for an explicit profile, reading `.env` first.
    pub fn load(environment: Environment) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        match environment {
            Environment::Production => Self::from_lookup(|key| env::var(key).ok()),
            Environment::Test => Ok(Self::for_tests()),
        }
    }

    /// Test profile: base settings with test overrides applied.
    pub fn for_tests() -> Self {
        Self::test_from_lookup(|key| env::var(key).ok())
    }

    /// Build production settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = parse_bool(lookup("DEBUG").as_deref()).unwrap_or(cfg!(debug_assertions));

        let (secret_key, defaulted) = match lookup("SECRET_KEY") {
            Some(key) if !key.trim().is_empty() => (key, false),
            Some(_) => return Err(AppError::config("SECRET_KEY must not be empty")),
            None if debug => (DEV_SECRET_KEY.to_string(), true),
            None => {
                return Err(AppError::config(
                    "SECRET_KEY environment variable must be set in production",
                ))
            }
        };

        let mut settings = Self::base(&lookup, secret_key);
        settings.debug = debug;
        settings.secret_key_defaulted = defaulted;
        Ok(settings)
    }

    /// Build test settings from an arbitrary key lookup.
    pub fn test_from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SECRET_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEV_SECRET_KEY.to_string());

        let mut settings = Self::base(&lookup, secret_key);
        settings.environment = Environment::Test;
        settings.testing = true;
        settings.debug = false;
        settings.database = DatabaseSettings {
            url: TEST_DATABASE_URL.to_string(),
        };
        settings.logging.level = TEST_LOG_LEVEL.to_string();
        settings.logging.console = true;
        settings.logging.file = false;
        settings.password_hasher = PasswordHasher::Argon2Fast;
        settings
    }

    fn base<F>(lookup: &F, secret_key: String) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_dir = lookup("BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        let installed_apps = lookup("INSTALLED_APPS")
            .map(|v| split_list(&v))
            .unwrap_or_else(|| DEFAULT_INSTALLED_APPS.iter().map(|s| s.to_string()).collect());

        let static_root = lookup("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join(DEFAULT_STATIC_ROOT));

        let logging = LoggingSettings {
            level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            console: true,
            file: parse_bool(lookup("LOG_TO_FILE").as_deref()).unwrap_or(true),
            dir: base_dir.join(LOGS_DIR_NAME),
            file_name: LOG_FILE_NAME.to_string(),
        };

        Self {
            secret_key,
            secret_key_defaulted: false,
            debug: false,
            testing: false,
            environment: Environment::Production,
            installed_apps,
            database: DatabaseSettings {
                url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            },
            static_url: DEFAULT_STATIC_URL.to_string(),
            static_root,
            logging,
            password_hasher: lookup("PASSWORD_HASHER")
                .and_then(|v| PasswordHasher::parse(&v))
                .unwrap_or_default(),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or_else(|| vec!["http://localhost:3000".to_string()]),
            base_dir,
        }
    }

    /// Secret key used for signing.
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Whether the secret key is the built-in development default.
    pub fn uses_dev_secret_key(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }

    /// Warnings about fallbacks taken while loading.
    ///
    /// Settings load before the subscriber exists, so callers log these once
    /// logging is up.
    pub fn startup_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.secret_key_defaulted {
            warnings.push("SECRET_KEY not set, using insecure default for development");
        }
        warnings
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
