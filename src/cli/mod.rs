//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `migrate` - Database migrations
//! - `check` - Configuration checks
//! - `createsuperuser` - Administrative account creation
//! - `test-logging` / `show-config` - Logging diagnostics

pub mod args;

pub use args::{Cli, Commands};
