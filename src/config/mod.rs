//! Application configuration module
//!
//! Handles environment variables, the test overrides and application-wide
//! constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{DatabaseSettings, Environment, LoggingSettings, PasswordHasher, Settings};
