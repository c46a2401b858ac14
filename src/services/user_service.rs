//! User service - account creation and credential checks.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::config::{PasswordHasher, MAX_USERNAME_LENGTH};
use crate::domain::{normalize_email, Password, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

const USERNAME_TAKEN: &str = "User with this username already exists";
const EMAIL_TAKEN: &str = "User already exists with this email";

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a regular active user
    async fn create_user(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User>;

    /// Create a user with staff and superuser flags
    async fn create_superuser(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User>;

    /// Check credentials; `identifier` is a username or an email address
    async fn authenticate(&self, identifier: String, password: String) -> AppResult<User>;

    /// Register from a display name and email; the email doubles as username
    async fn signup(&self, name: String, email: String, password: String) -> AppResult<User>;

    async fn get_user(&self, id: Uuid) -> AppResult<User>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
}

impl UserManager {
    pub fn new(users: Arc<dyn UserRepository>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    async fn build_user(&self, username: String, email: &str, password: &str) -> AppResult<User> {
        validate_username(&username)?;

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(USERNAME_TAKEN));
        }

        let password = Password::with_hasher(password, self.hasher)?;
        Ok(User::new(username, email, password))
    }
}

/// Usernames: 1-150 chars of letters, digits and `@ . + - _`.
fn validate_username(username: &str) -> AppResult<()> {
    if username.is_empty() {
        return Err(AppError::validation("The given username must be set"));
    }
    if username.chars().count() as u64 > MAX_USERNAME_LENGTH {
        return Err(AppError::validation(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_LENGTH
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
    {
        return Err(AppError::validation(
            "Username may contain only letters, numbers, and @/./+/-/_ characters",
        ));
    }
    Ok(())
}

/// Replace the message of a `Conflict` raised by the unique keys in storage.
fn conflict_as(message: &'static str) -> impl Fn(AppError) -> AppError {
    move |e| match e {
        AppError::Conflict(_) => AppError::conflict(message),
        other => other,
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let user = self.build_user(username, &email, &password).await?;
        let user = self
            .users
            .insert(user)
            .await
            .map_err(conflict_as(USERNAME_TAKEN))?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    async fn create_superuser(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let mut user = self.build_user(username, &email, &password).await?;
        user.promote_to_superuser();
        let user = self
            .users
            .insert(user)
            .await
            .map_err(conflict_as(USERNAME_TAKEN))?;
        tracing::info!(user_id = %user.id, username = %user.username, "Superuser created");
        Ok(user)
    }

    async fn authenticate(&self, identifier: String, password: String) -> AppResult<User> {
        let identifier = identifier.trim();
        // Usernames may contain '@', so an email miss falls back to them
        let mut found = None;
        if identifier.contains('@') {
            found = self.users.find_by_email(&normalize_email(identifier)).await?;
        }
        if found.is_none() {
            found = self.users.find_by_username(identifier).await?;
        }

        let user = match found {
            Some(user) if user.is_active && user.check_password(&password) => user,
            _ => {
                tracing::debug!("Authentication failed");
                return Err(AppError::InvalidCredentials);
            }
        };

        self.users.update_last_login(user.id, Utc::now()).await
    }

    async fn signup(&self, name: String, email: String, password: String) -> AppResult<User> {
        let email = normalize_email(&email);
        if self.users.exists_by_email(&email).await? {
            return Err(AppError::conflict(EMAIL_TAKEN));
        }

        let mut user = self
            .build_user(email.clone(), &email, &password)
            .await
            .map_err(conflict_as(EMAIL_TAKEN))?;
        user.set_name(&name);

        let user = self
            .users
            .insert(user)
            .await
            .map_err(conflict_as(EMAIL_TAKEN))?;
        tracing::info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }
}
