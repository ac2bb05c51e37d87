//! Discord integration for vcbuddy.
//!
//! This crate connects the platform-independent core to Discord using the
//! Serenity library.
//!
//! # Architecture
//!
//! - **conversions**: snowflake and reply conversions between Serenity and core types
//! - **gateway**: cache- and HTTP-backed `ChatPlatform` and `PresenceOracle`
//! - **commands**: `best_friend` slash command definition, registration and parsing
//! - **handler**: Serenity `EventHandler` feeding voice joins and commands to the core
//! - **client**: client setup and lifecycle management
//!
//! # Usage
//!
//! ```rust,ignore
//! use vcbuddy_social::{CommandScope, VcbuddyBot};
//!
//! let mut bot = VcbuddyBot::new(&token, store, grace, CommandScope::Global, true).await?;
//! bot.run_until_ctrl_c().await?;
//! ```

#![warn(missing_docs)]

mod client;
mod commands;
mod conversions;
mod error;
mod gateway;
mod handler;

pub use client::VcbuddyBot;
pub use commands::{
    CommandScope, USER_OPTION, best_friend_command, parse_interaction, register, unregister,
};
pub use conversions::{notification_message, render_reply, voice_join};
pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use gateway::SerenityGateway;
pub use handler::{DebouncerSlot, VcbuddyHandler};
