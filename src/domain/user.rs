//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Password;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active, non-staff user.
    pub fn new(username: String, email: &str, password: Password) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email: normalize_email(email),
            password_hash: password.into_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
            is_staff: false,
            is_superuser: false,
            date_joined: Utc::now(),
            last_login: None,
        }
    }

    /// Check a raw password against the stored hash.
    pub fn check_password(&self, raw_password: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(raw_password)
    }

    /// First and last name joined by a space, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Split a display name into first and last name.
    pub fn set_name(&mut self, name: &str) {
        let mut parts = name.trim().splitn(2, char::is_whitespace);
        self.first_name = parts.next().unwrap_or_default().to_string();
        self.last_name = parts.next().unwrap_or_default().trim().to_string();
    }

    /// Grant staff and superuser flags.
    pub fn promote_to_superuser(&mut self) {
        self.is_staff = true;
        self.is_superuser = true;
    }
}

/// Lowercase the domain part of an email address, leave the local part as is.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "john")]
    pub username: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,
    pub is_staff: bool,
    pub date_joined: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.full_name(),
            id: user.id,
            username: user.username,
            email: user.email,
            is_staff: user.is_staff,
            date_joined: user.date_joined,
        }
    }
}
