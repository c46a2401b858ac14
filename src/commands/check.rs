//! Check command - Reports configuration problems.

use std::io::Write;

use crate::apps::AppRegistry;
use crate::checks::{self, CheckMessage};
use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the check command, printing to stdout.
pub async fn execute(args: CheckArgs, settings: Settings) -> AppResult<()> {
    run(args, &settings, &mut std::io::stdout()).await
}

/// Run the checks and write the report to `out`.
///
/// Fails when any check reports an error or the database is unreachable.
pub async fn run<W: Write>(args: CheckArgs, settings: &Settings, out: &mut W) -> AppResult<()> {
    let apps = AppRegistry::populate(&settings.installed_apps)?;
    let messages = checks::run_checks(settings, &apps);

    if args.database {
        let database = Database::connect_without_migrations(&settings.database).await?;
        database.ping().await?;
        tracing::debug!("Database check passed");
    }

    write_report(&messages, out)?;

    if checks::has_errors(&messages) {
        return Err(AppError::config("system check identified errors"));
    }
    Ok(())
}

fn write_report<W: Write>(messages: &[CheckMessage], out: &mut W) -> AppResult<()> {
    if messages.is_empty() {
        writeln!(out, "System check identified no issues.")?;
        return Ok(());
    }

    for message in messages {
        let level = if message.is_error() { "ERROR" } else { "WARNING" };
        writeln!(out, "{}: {}", level, message)?;
    }
    writeln!(out, "System check identified {} issue(s).", messages.len())?;
    Ok(())
}
