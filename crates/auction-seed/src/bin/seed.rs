//! Provisioning script - creates collections, indexes and seed users
//!
//! Run with:
//! ```
//! MONGO_INITDB_DATABASE=auction_db cargo run -p auction-seed --bin seed
//! ```

use auction_seed::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let client = connect(&config).await?;

    tracing::info!("Using database {}", config.database);

    let report = Seeder::new(&client, &config).run().await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Database: {}", report.database);
    tracing::info!("  Collections created: {}", report.collections_created.len());
    tracing::info!("  Indexes: {}", report.indexes.join(", "));
    tracing::info!("  Users inserted: {}", report.users_inserted);
    tracing::info!("  Users already present: {}", report.users_skipped);

    Ok(())
}
