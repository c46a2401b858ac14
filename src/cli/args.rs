//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

use crate::config::Environment;

/// OLL Sales CRM backend
#[derive(Parser, Debug)]
#[command(name = "oll-crm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings profile (defaults to OLL_CRM_ENV, then production)
    #[arg(long, global = true, value_enum)]
    pub env: Option<Environment>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Inspect the project for configuration problems
    Check(CheckArgs),

    /// Create a user with staff and superuser flags
    #[command(name = "createsuperuser")]
    CreateSuperuser(CreateSuperuserArgs),

    /// Emit one message per log level to exercise the logging setup
    TestLogging,

    /// Print the resolved logging configuration and exit non-zero on error
    ShowConfig,
}

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Host to bind to, overriding SERVER_HOST
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on, overriding SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the check command
#[derive(Parser, Debug, Default)]
pub struct CheckArgs {
    /// Also verify the database answers `SELECT 1`
    #[arg(long)]
    pub database: bool,
}

/// Arguments for the createsuperuser command
#[derive(Parser, Debug)]
pub struct CreateSuperuserArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    /// Read from the environment to keep it out of shell history
    #[arg(long, env = "SUPERUSER_PASSWORD", hide_env_values = true)]
    pub password: String,
}
