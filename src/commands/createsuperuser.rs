//! Createsuperuser command - Creates an administrative account.

use crate::api::AppState;
use crate::apps::AppRegistry;
use crate::cli::args::CreateSuperuserArgs;
use crate::config::Settings;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the createsuperuser command
pub async fn execute(args: CreateSuperuserArgs, settings: Settings) -> AppResult<()> {
    let apps = AppRegistry::populate(&settings.installed_apps)?;
    let database = Database::connect(&settings.database).await?;
    let state = AppState::from_database(&database, settings, apps);

    let user = state
        .user_service
        .create_superuser(args.username, args.email, args.password)
        .await?;

    println!("Superuser created successfully: {}", user.username);
    Ok(())
}
