//! Serenity event handler for vcbuddy.
//!
//! Voice state updates become debounced join events and `best_friend`
//! interactions are answered by the command handlers.

use crate::commands::{self, CommandScope, parse_interaction};
use crate::conversions::{render_reply, voice_join};
use serenity::all::{Interaction, Ready, VoiceState};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::GatewayIntents;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, warn};
use vcbuddy_core::JoinEvent;
use vcbuddy_notify::{CommandHandlers, JoinDebouncer, Reply};

/// Shared slot for the debouncer, filled once the client exists.
///
/// The debouncer needs the client's cache and HTTP handle, which Serenity
/// only creates after the handler has been handed over.
pub type DebouncerSlot = Arc<OnceLock<Arc<JoinDebouncer>>>;

/// Event handler for the vcbuddy Discord bot.
pub struct VcbuddyHandler {
    commands: CommandHandlers,
    debouncer: DebouncerSlot,
    scope: CommandScope,
}

impl VcbuddyHandler {
    /// Create a new VcbuddyHandler.
    pub fn new(commands: CommandHandlers, debouncer: DebouncerSlot, scope: CommandScope) -> Self {
        Self {
            commands,
            debouncer,
            scope,
        }
    }

    /// Required gateway intents for the bot.
    ///
    /// Guilds fill the cache with channels and names; voice states drive
    /// both join detection and presence checks.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES
    }
}

#[async_trait]
impl EventHandler for VcbuddyHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            guilds = ready.guilds.len(),
            "Logged in"
        );

        info!(scope = ?self.scope, "Adding commands...");
        if let Err(e) = commands::register(&ctx.http, self.scope).await {
            error!(error = %e, "Cannot create best_friend command");
        }
    }

    async fn voice_state_update(&self, _ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        let update = voice_join(old.as_ref(), &new);
        let Some(event) = JoinEvent::from_voice_update(&update) else {
            debug!(?update, "Not a fresh voice join");
            return;
        };

        info!(
            user_id = %event.user_id(),
            channel_id = %event.channel_id(),
            "User joined voice channel"
        );

        match self.debouncer.get() {
            Some(debouncer) => {
                debouncer.schedule(event);
            }
            None => warn!("Join arrived before the debouncer was ready"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let reply = match parse_interaction(&command) {
            Ok(parsed) => self.commands.dispatch(&parsed).await,
            Err(e) => {
                warn!(error = %e, "Rejected interaction");
                Reply::Text("Unknown command".to_string())
            }
        };

        if let Err(e) = command.create_response(&ctx, render_reply(reply)).await {
            error!(command = %command.data.name, error = %e, "Failed to respond to command");
        }
    }
}
