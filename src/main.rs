//! OLL CRM backend - Application entry point
//!
//! CLI-based entry point that dispatches to the commands.

use clap::Parser;

use oll_crm::{
    cli::{Cli, Commands},
    commands,
    config::{Environment, Settings},
    logging,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let environment = cli.env.unwrap_or_else(Environment::from_env);

    // Reports its own failures before any subscriber exists
    if let Commands::ShowConfig = cli.command {
        return commands::show_config::execute(environment);
    }

    let settings = match Settings::load(environment) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            return 1;
        }
    };

    // Held until run returns so the file handler flushes
    let _guard = match logging::init(&settings.logging, cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };
    tracing::debug!(?environment, "Settings loaded");
    logging::log_startup_warnings(&settings);

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, settings).await,
        Commands::Migrate(args) => commands::migrate::execute(args, settings).await,
        Commands::Check(args) => commands::check::execute(args, settings).await,
        Commands::CreateSuperuser(args) => {
            commands::createsuperuser::execute(args, settings).await
        }
        Commands::TestLogging => commands::test_logging::execute(),
        Commands::ShowConfig => unreachable!("handled before logging setup"),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            1
        }
    }
}
