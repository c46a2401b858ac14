//! OLL CRM backend
//!
//! HTTP backend for the OLL Sales CRM, built on Axum and SeaORM.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings, test overrides and constants
//! - **apps**: Installed application registry
//! - **checks**: Configuration checks
//! - **logging**: Tracing subscriber setup
//! - **domain**: Users and passwords
//! - **services**: Account use cases
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Check configuration, including the database
//! cargo run -- check --database
//! ```

pub mod api;
pub mod apps;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod logging;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use apps::{AppConfig, AppRegistry};
pub use config::Settings;
pub use domain::{Password, User};
pub use errors::{AppError, AppResult};
