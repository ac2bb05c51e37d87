//! vcbuddy binary support: configuration, command-line flags and logging.

#![warn(missing_docs)]

mod cli;
mod config;
mod logging;

pub use cli::{Cli, Settings};
pub use config::BotConfig;
pub use logging::{LoggingConfig, init_logging};
