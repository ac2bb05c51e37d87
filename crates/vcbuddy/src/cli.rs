//! Command-line interface.

use crate::config::BotConfig;
use clap::Parser;
use derive_getters::Getters;
use std::path::PathBuf;
use tracing::{debug, info};
use vcbuddy_error::{ConfigError, VcbuddyResult};

/// Fallback environment variable for the bot token.
const TOKEN_FALLBACK_ENV: &str = "DISCORD_TOKEN";

/// vcbuddy - Get a DM when your best friends join a voice channel
#[derive(Parser, Debug, Default)]
#[command(name = "vcbuddy")]
#[command(about = "Get a DM when your best friends join a voice channel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot access token
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Test guild id; if empty or not passed, the command is registered globally
    #[arg(long, env = "GUILD_ID")]
    pub guild: Option<String>,

    /// Remove the slash command after shutting down
    #[arg(
        long = "rmcmd",
        alias = "remove-commands",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub remove_commands: Option<bool>,

    /// SQLite database path or `sqlite://` URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Seconds a user must stay in voice before friends are notified
    #[arg(long)]
    pub grace_secs: Option<u64>,

    /// Additional configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Everything needed to start the bot.
#[derive(Debug, Clone, Getters)]
pub struct Settings {
    token: String,
    config: BotConfig,
}

impl Cli {
    /// Load layered configuration and apply flags on top.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or no token was
    /// supplied.
    pub fn settings(&self) -> VcbuddyResult<Settings> {
        let config = BotConfig::load(self.config.as_deref())?;
        let token = self
            .token
            .clone()
            .or_else(|| std::env::var(TOKEN_FALLBACK_ENV).ok());
        self.merge(config, token)
    }

    /// Apply flags to an already loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `token` is missing or empty, or if the guild id
    /// is not a number.
    #[track_caller]
    pub fn merge(&self, mut config: BotConfig, token: Option<String>) -> VcbuddyResult<Settings> {
        if let Some(url) = &self.database_url {
            config.override_database_url(url.clone());
        }
        if let Some(secs) = self.grace_secs {
            config.override_grace_period_secs(secs);
        }
        if let Some(remove) = self.remove_commands {
            config.override_remove_commands(remove);
        }
        if let Some(guild) = self.guild_id()? {
            config.override_guild_id(guild);
        }
        debug!(?config, "Resolved configuration");

        let token = token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::new("Missing bot token: pass --token or set BOT_TOKEN"))?;

        info!(
            database = config.database_path(),
            grace_secs = config.grace_period_secs(),
            guild_id = ?config.guild_id(),
            "Configuration loaded"
        );

        Ok(Settings { token, config })
    }

    /// Guild id flag, with an empty value meaning "not set".
    #[track_caller]
    fn guild_id(&self) -> VcbuddyResult<Option<u64>> {
        let Some(raw) = self.guild.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse()
            .map(Some)
            .map_err(|e| ConfigError::new(format!("Invalid guild id '{}': {}", raw, e)).into())
    }
}
