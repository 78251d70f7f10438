use anyhow::Result;
use tracing::info;

use contact_desk::{bootstrap, config::Config, logging::init_logging, run_until_shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;

    init_logging(&config.logging);

    info!("Starting Contact Desk v{}", env!("CARGO_PKG_VERSION"));

    let backend = bootstrap(&config).await?;

    run_until_shutdown(backend).await;
    info!("Contact Desk stopped");

    Ok(())
}
