//! vcbuddy Discord bot.
//!
//! Watches voice channels and sends a direct message to everyone who listed
//! the joining user as a best friend.

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use vcbuddy::{Cli, LoggingConfig, init_logging};
use vcbuddy_database::SqliteRelationshipStore;
use vcbuddy_error::VcbuddyError;
use vcbuddy_social::{CommandScope, VcbuddyBot};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&LoggingConfig::new(cli.verbose).with_json_logs(cli.json_logs))?;

    let settings = cli.settings()?;
    let config = settings.config();

    let store = match SqliteRelationshipStore::open(config.database_path()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(error = %e, "Failed to open database");
            return Err(VcbuddyError::from(e).into());
        }
    };

    let mut bot = VcbuddyBot::new(
        settings.token(),
        store,
        config.grace_period(),
        CommandScope::from(config.guild()),
        *config.remove_commands(),
    )
    .await?;

    info!("Starting vcbuddy");
    bot.run_until_ctrl_c().await?;
    Ok(())
}
