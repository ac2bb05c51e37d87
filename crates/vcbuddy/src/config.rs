//! Bot configuration.
//!
//! Sources in order of precedence (later sources override earlier):
//! 1. Bundled defaults (`vcbuddy.toml` shipped with the binary)
//! 2. User config in home directory (`~/.config/vcbuddy/vcbuddy.toml`)
//! 3. User config in current directory (`./vcbuddy.toml`)
//! 4. An explicit `--config` file
//! 5. `VCBUDDY_*` environment variables
//!
//! Command-line flags are applied on top by the CLI layer.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use vcbuddy_core::GuildId;
use vcbuddy_error::{ConfigError, VcbuddyResult};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../vcbuddy.toml");

/// URL scheme accepted in front of a SQLite path.
const SQLITE_SCHEME: &str = "sqlite://";

/// Settings read from configuration files and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct BotConfig {
    /// SQLite database, as a path or `sqlite://` URL
    database_url: String,
    /// Seconds to wait before acting on a voice join
    grace_period_secs: u64,
    /// Delete the slash command on shutdown
    remove_commands: bool,
    /// Register the command in this guild only
    #[serde(default)]
    guild_id: Option<u64>,
}

impl BotConfig {
    /// Load configuration from every layer.
    ///
    /// Missing user config files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be read or a value has the
    /// wrong type.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> VcbuddyResult<Self> {
        Self::load_from(explicit, Environment::with_prefix("VCBUDDY").try_parsing(true))
    }

    /// Load configuration with a caller-supplied environment source.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_from(explicit: Option<&Path>, env: Environment) -> VcbuddyResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vcbuddy/vcbuddy.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vcbuddy").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder
            .add_source(env)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file does not parse.
    pub fn defaults() -> VcbuddyResult<Self> {
        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)).into())
    }

    /// Filesystem path of the database, without any `sqlite://` scheme.
    pub fn database_path(&self) -> &str {
        self.database_url
            .strip_prefix(SQLITE_SCHEME)
            .unwrap_or(&self.database_url)
    }

    /// Grace period as a duration.
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_secs)
    }

    /// Guild to register the command in, if any.
    pub fn guild(&self) -> Option<GuildId> {
        self.guild_id.map(GuildId)
    }

    pub(crate) fn override_database_url(&mut self, url: String) {
        self.database_url = url;
    }

    pub(crate) fn override_grace_period_secs(&mut self, secs: u64) {
        self.grace_period_secs = secs;
    }

    pub(crate) fn override_remove_commands(&mut self, remove: bool) {
        self.remove_commands = remove;
    }

    pub(crate) fn override_guild_id(&mut self, guild: u64) {
        self.guild_id = Some(guild);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_strips_scheme() {
        let mut config = BotConfig::defaults().unwrap();
        assert_eq!(config.database_path(), "database.db");

        config.override_database_url("/var/lib/vcbuddy.db".to_string());
        assert_eq!(config.database_path(), "/var/lib/vcbuddy.db");
    }
}
