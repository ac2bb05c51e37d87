//! Display metadata resolved from the platform.

use crate::{ChannelId, GuildId, UserId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A resolved user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct UserInfo {
    id: UserId,
    name: String,
    avatar_url: Option<String>,
}

impl UserInfo {
    /// Create a user record.
    pub fn new(id: UserId, name: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url,
        }
    }
}

/// A resolved channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChannelInfo {
    id: ChannelId,
    name: String,
}

impl ChannelInfo {
    /// Create a channel record.
    pub fn new(id: ChannelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A resolved guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GuildInfo {
    id: GuildId,
    name: String,
}

impl GuildInfo {
    /// Create a guild record.
    pub fn new(id: GuildId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
