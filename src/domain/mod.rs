//! Domain layer - Core entities and value objects
//!
//! Independent of HTTP and persistence concerns.

pub mod password;
pub mod user;

pub use password::Password;
pub use user::{normalize_email, User, UserResponse};
