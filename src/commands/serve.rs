//! Serve command - Starts the HTTP server.

use crate::api::{create_router, AppState};
use crate::apps::AppRegistry;
use crate::checks;
use crate::cli::args::ServeArgs;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut settings: Settings) -> AppResult<()> {
    tracing::info!("Starting server...");

    apply_overrides(args, &mut settings);
    let addr = settings.server_addr();

    let apps = AppRegistry::populate(&settings.installed_apps)?;

    let messages = checks::run_checks(&settings, &apps);
    for message in &messages {
        if message.is_error() {
            tracing::error!("System check: {}", message);
        } else {
            tracing::warn!("System check: {}", message);
        }
    }
    if checks::has_errors(&messages) {
        return Err(AppError::config("system checks reported errors"));
    }

    let database = Database::connect(&settings.database).await?;

    let app_state = AppState::from_database(&database, settings, apps);
    let app = create_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Command-line host and port win over the loaded settings.
pub fn apply_overrides(args: ServeArgs, settings: &mut Settings) {
    if let Some(host) = args.host {
        settings.server_host = host;
    }
    if let Some(port) = args.port {
        settings.server_port = port;
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn settings_with_port(port: &str) -> Settings {
        let port = port.to_string();
        Settings::from_lookup(move |key| match key {
            "SECRET_KEY" => Some("serve-test-secret".to_string()),
            "SERVER_HOST" => Some("127.0.0.1".to_string()),
            "SERVER_PORT" => Some(port.clone()),
            _ => None,
        })
        .unwrap()
    }

    fn serve_args(argv: &[&str]) -> ServeArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Serve(args) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_settings_address_used_without_flags() {
        let mut settings = settings_with_port("9001");
        apply_overrides(serve_args(&["oll-crm", "serve"]), &mut settings);

        assert_eq!(settings.server_port, 9001);
        assert_eq!(settings.server_addr(), "127.0.0.1:9001");
    }

    #[test]
    fn test_flags_override_settings_address() {
        let mut settings = settings_with_port("9001");
        apply_overrides(
            serve_args(&["oll-crm", "serve", "-H", "0.0.0.0", "-p", "9100"]),
            &mut settings,
        );

        assert_eq!(settings.server_addr(), "0.0.0.0:9100");
    }
}
