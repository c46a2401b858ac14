//! System checks run by the `check` command and at server startup.

use std::fmt;

use serde::Serialize;

use crate::apps::AppRegistry;
use crate::config::{Settings, MIN_SECRET_KEY_LENGTH, REQUIRED_APPS};

/// Severity of a check message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckLevel {
    Warning,
    Error,
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckMessage {
    pub level: CheckLevel,
    pub id: &'static str,
    pub msg: String,
}

impl CheckMessage {
    fn error(id: &'static str, msg: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Error,
            id,
            msg: msg.into(),
        }
    }

    fn warning(id: &'static str, msg: impl Into<String>) -> Self {
        Self {
            level: CheckLevel::Warning,
            id,
            msg: msg.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == CheckLevel::Error
    }
}

impl fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.id, self.msg)
    }
}

/// Run every configuration check.
pub fn run_checks(settings: &Settings, registry: &AppRegistry) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    if settings.secret_key().trim().is_empty() {
        messages.push(CheckMessage::error("crm.E001", "SECRET_KEY must not be empty."));
    } else if !settings.debug && !settings.testing {
        if settings.uses_dev_secret_key() {
            messages.push(CheckMessage::warning(
                "crm.W001",
                "SECRET_KEY is the development default; set a unique key before deploying.",
            ));
        } else if settings.secret_key().chars().count() < MIN_SECRET_KEY_LENGTH {
            messages.push(CheckMessage::warning(
                "crm.W001",
                format!(
                    "SECRET_KEY has fewer than {} characters.",
                    MIN_SECRET_KEY_LENGTH
                ),
            ));
        }
    }

    for app in REQUIRED_APPS {
        if !registry.is_installed(app) {
            messages.push(CheckMessage::error(
                "crm.E002",
                format!("Required application '{}' is not installed.", app),
            ));
        }
    }

    if !settings.static_url.ends_with('/') {
        messages.push(CheckMessage::error(
            "crm.E003",
            format!("STATIC_URL '{}' must end with a slash.", settings.static_url),
        ));
    }

    messages
}

/// Whether any message is an error.
pub fn has_errors(messages: &[CheckMessage]) -> bool {
    messages.iter().any(CheckMessage::is_error)
}
