use anyhow::Result;
use dotenvy::dotenv;
use tracing::Level;

use sheet_sync::{pipeline, SyncConfig};

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = SyncConfig::from_env()?;
    let source = config.source()?;

    pipeline::run_all(&config, source.as_ref())?;

    Ok(())
}
