//! Voice channel events and presence.

use crate::{ChannelId, GuildId, UserId};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Raw voice state change as delivered by the platform.
///
/// `channel_id` is `None` when the user disconnected. `previous_channel_id`
/// is the channel the user was in immediately before this update, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceJoin {
    /// User whose voice state changed
    pub user_id: UserId,
    /// Channel the user is in now
    pub channel_id: Option<ChannelId>,
    /// Guild the update belongs to
    pub guild_id: Option<GuildId>,
    /// Channel the user was in before the update
    pub previous_channel_id: Option<ChannelId>,
}

/// A fresh arrival in a voice channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct JoinEvent {
    user_id: UserId,
    channel_id: ChannelId,
    guild_id: GuildId,
    observed_at: DateTime<Utc>,
}

impl JoinEvent {
    /// Create a join event observed now.
    pub fn new(user_id: UserId, channel_id: ChannelId, guild_id: GuildId) -> Self {
        Self {
            user_id,
            channel_id,
            guild_id,
            observed_at: Utc::now(),
        }
    }

    /// Interpret a voice state update as a join.
    ///
    /// Returns `None` for disconnects, for updates outside a guild and for
    /// channel switches: a user who was already in some voice channel has
    /// not freshly joined.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcbuddy_core::{ChannelId, GuildId, JoinEvent, UserId, VoiceJoin};
    ///
    /// let switch = VoiceJoin {
    ///     user_id: UserId(1),
    ///     channel_id: Some(ChannelId(20)),
    ///     guild_id: Some(GuildId(3)),
    ///     previous_channel_id: Some(ChannelId(10)),
    /// };
    /// assert!(JoinEvent::from_voice_update(&switch).is_none());
    /// ```
    pub fn from_voice_update(update: &VoiceJoin) -> Option<Self> {
        if update.previous_channel_id.is_some() {
            return None;
        }
        let channel_id = update.channel_id?;
        let guild_id = update.guild_id?;
        Some(Self::new(update.user_id, channel_id, guild_id))
    }
}

/// Where a user currently is in voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoicePresence {
    /// Voice channel the user is connected to
    pub channel_id: ChannelId,
    /// Guild owning that channel
    pub guild_id: GuildId,
}

impl VoicePresence {
    /// Whether this presence is in the given channel.
    pub fn is_in(&self, channel_id: ChannelId) -> bool {
        self.channel_id == channel_id
    }
}
