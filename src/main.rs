use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use troop_portal::{cli::Cli, config, errors::Result};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Parse the command line and load configuration
    let cli = Cli::parse();
    let config = config::load_app_configuration(cli.config.as_deref())
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Run the requested action
    troop_portal::cli::execute(cli, config)
        .await
        .inspect_err(|e| error!("{}", e))
}
