//! Discord bot client setup and lifecycle management.

use crate::commands::{self, CommandScope};
use crate::error::{DiscordError, DiscordErrorKind, DiscordResult};
use crate::gateway::SerenityGateway;
use crate::handler::{DebouncerSlot, VcbuddyHandler};
use serenity::Client;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{error, info, instrument};
use vcbuddy_interface::RelationshipStore;
use vcbuddy_notify::{CommandHandlers, JoinDebouncer, NotificationEngine};

/// Main Discord bot client for vcbuddy.
///
/// Wires the relationship store, the Serenity gateway and the debouncer
/// together and owns the client connection.
///
/// # Example
/// ```rust,ignore
/// use std::sync::Arc;
/// use std::time::Duration;
/// use vcbuddy_database::SqliteRelationshipStore;
/// use vcbuddy_social::{CommandScope, VcbuddyBot};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("BOT_TOKEN")?;
///     let store = Arc::new(SqliteRelationshipStore::open("database.db")?);
///
///     let mut bot = VcbuddyBot::new(&token, store, Duration::from_secs(60), CommandScope::Global, true).await?;
///     bot.run_until_ctrl_c().await?;
///     Ok(())
/// }
/// ```
pub struct VcbuddyBot {
    client: Client,
    debouncer: Arc<JoinDebouncer>,
    scope: CommandScope,
    remove_commands: bool,
}

impl VcbuddyBot {
    /// Create a new VcbuddyBot instance.
    ///
    /// # Arguments
    /// * `token` - Discord bot token from the Discord Developer Portal
    /// * `store` - Where best friend links are kept
    /// * `grace` - How long a user must stay in voice before friends are told
    /// * `scope` - Where to register the slash command
    /// * `remove_commands` - Whether to delete the command again on shutdown
    ///
    /// # Errors
    /// Returns an error if the Serenity client fails to initialize.
    #[instrument(skip(token, store), fields(token_len = token.len()))]
    pub async fn new(
        token: &str,
        store: Arc<dyn RelationshipStore>,
        grace: Duration,
        scope: CommandScope,
        remove_commands: bool,
    ) -> DiscordResult<Self> {
        info!("Initializing vcbuddy Discord bot");

        let slot: DebouncerSlot = Arc::new(OnceLock::new());
        let handler = VcbuddyHandler::new(
            CommandHandlers::new(Arc::clone(&store)),
            Arc::clone(&slot),
            scope,
        );
        let intents = VcbuddyHandler::intents();

        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        let gateway = Arc::new(SerenityGateway::new(
            Arc::clone(&client.cache),
            Arc::clone(&client.http),
        ));
        let engine = Arc::new(NotificationEngine::new(
            store,
            gateway.clone(),
            gateway.clone(),
        ));
        let debouncer = Arc::new(JoinDebouncer::new(engine, gateway, grace));
        // The slot is fresh, so this is the only write.
        let _ = slot.set(Arc::clone(&debouncer));

        info!(grace_secs = grace.as_secs(), "Serenity client built successfully");

        Ok(Self {
            client,
            debouncer,
            scope,
            remove_commands,
        })
    }

    /// Run the bot until Ctrl+C, then shut down gracefully.
    ///
    /// On the signal, pending joins are abandoned, the command is removed
    /// when configured to, and every shard is closed.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn run_until_ctrl_c(&mut self) -> DiscordResult<()> {
        let shard_manager = Arc::clone(&self.client.shard_manager);
        let http = Arc::clone(&self.client.http);
        let debouncer = Arc::clone(&self.debouncer);
        let scope = self.scope;
        let remove_commands = self.remove_commands;

        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Failed to listen for Ctrl+C");
                return;
            }
            info!("Received Ctrl+C, shutting down");

            debouncer.shutdown();
            if remove_commands {
                if let Err(e) = commands::unregister(&http, scope).await {
                    error!(error = %e, "Could not remove commands");
                }
            }
            shard_manager.shutdown_all().await;
        });

        info!("Press Ctrl+C to exit");
        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        info!("Gracefully shutting down.");
        Ok(())
    }
}
