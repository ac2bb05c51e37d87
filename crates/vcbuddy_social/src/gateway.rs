//! Serenity-backed collaborators for the notification engine.

use crate::conversions::{
    notification_message, to_serenity_channel, to_serenity_guild, to_serenity_user,
};
use crate::error::platform_error;
use async_trait::async_trait;
use serenity::all::{
    Cache, Channel, GuildId as SerenityGuildId, Http, UserId as SerenityUserId,
};
use std::sync::Arc;
use tracing::{debug, instrument};
use vcbuddy_core::{
    ChannelId, ChannelInfo, GuildId, GuildInfo, Notification, UserId, UserInfo, VoicePresence,
};
use vcbuddy_error::{PlatformError, PlatformErrorKind};
use vcbuddy_interface::{ChatPlatform, PresenceOracle};

/// Discord's "Unknown Member" answer to a member lookup.
const NOT_FOUND: u16 = 404;

/// Reads presence and guild data from the gateway cache and falls back to
/// the REST API for anything the cache does not hold.
#[derive(Clone)]
pub struct SerenityGateway {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenityGateway {
    /// Create a gateway over a client's cache and HTTP handle.
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }

    fn cache_http(&self) -> (&Arc<Cache>, &Http) {
        (&self.cache, self.http.as_ref())
    }

    /// Voice presence from the cached voice states of every known guild.
    fn cached_presence(&self, user: SerenityUserId) -> Option<VoicePresence> {
        self.cache.guilds().into_iter().find_map(|guild_id| {
            let guild = self.cache.guild(guild_id)?;
            let channel_id = guild.voice_states.get(&user)?.channel_id?;
            Some(VoicePresence {
                channel_id: ChannelId(channel_id.get()),
                guild_id: GuildId(guild_id.get()),
            })
        })
    }

    fn cached_guild_name(&self, guild: SerenityGuildId) -> Option<String> {
        self.cache.guild(guild).map(|guild| guild.name.clone())
    }

    fn cached_membership(&self, guild: SerenityGuildId, user: SerenityUserId) -> Option<bool> {
        let cached = self.cache.guild(guild)?;
        if cached.members.contains_key(&user) {
            return Some(true);
        }
        // Without the members intent the cache only holds a partial list.
        None
    }
}

#[async_trait]
impl PresenceOracle for SerenityGateway {
    #[instrument(skip(self))]
    async fn current_voice_presence(&self, user: UserId) -> Option<VoicePresence> {
        let user = to_serenity_user(user).ok()?;
        let presence = self.cached_presence(user);
        debug!(?presence, "Looked up voice presence");
        presence
    }
}

#[async_trait]
impl ChatPlatform for SerenityGateway {
    #[instrument(skip(self))]
    async fn resolve_user(&self, user: UserId) -> Result<UserInfo, PlatformError> {
        let found = to_serenity_user(user)?
            .to_user(self.cache_http())
            .await
            .map_err(|e| {
                debug!(error = %e, "User lookup failed");
                PlatformError::new(PlatformErrorKind::UserNotFound(user.0))
            })?;
        Ok(UserInfo::new(user, found.name.clone(), found.avatar_url()))
    }

    #[instrument(skip(self))]
    async fn resolve_channel(&self, channel: ChannelId) -> Result<ChannelInfo, PlatformError> {
        let found = to_serenity_channel(channel)?
            .to_channel(self.cache_http())
            .await
            .map_err(platform_error)?;
        guild_channel_info(channel, found)
    }

    #[instrument(skip(self))]
    async fn resolve_guild(&self, guild: GuildId) -> Result<GuildInfo, PlatformError> {
        let guild_id = to_serenity_guild(guild)?;
        if let Some(name) = self.cached_guild_name(guild_id) {
            return Ok(GuildInfo::new(guild, name));
        }
        let partial = self
            .http
            .get_guild(guild_id)
            .await
            .map_err(|e| {
                debug!(error = %e, "Guild lookup failed");
                PlatformError::new(PlatformErrorKind::GuildNotFound(guild.0))
            })?;
        Ok(GuildInfo::new(guild, partial.name))
    }

    #[instrument(skip(self))]
    async fn guild_membership(&self, guild: GuildId, user: UserId) -> Result<bool, PlatformError> {
        let guild_id = to_serenity_guild(guild)?;
        let user_id = to_serenity_user(user)?;
        if let Some(member) = self.cached_membership(guild_id, user_id) {
            return Ok(member);
        }

        match self.http.get_member(guild_id, user_id).await {
            Ok(_) => Ok(true),
            Err(serenity::Error::Http(e))
                if e.status_code().map(|status| status.as_u16()) == Some(NOT_FOUND) =>
            {
                Ok(false)
            }
            Err(e) => Err(platform_error(e)),
        }
    }

    #[instrument(skip(self))]
    async fn open_direct_channel(&self, user: UserId) -> Result<ChannelId, PlatformError> {
        let private = to_serenity_user(user)?
            .create_dm_channel(self.cache_http())
            .await
            .map_err(|e| PlatformError::new(PlatformErrorKind::DirectChannel(e.to_string())))?;
        Ok(ChannelId(private.id.get()))
    }

    #[instrument(skip(self, notification))]
    async fn send_message(
        &self,
        channel: ChannelId,
        notification: &Notification,
    ) -> Result<(), PlatformError> {
        to_serenity_channel(channel)?
            .send_message(self.cache_http(), notification_message(notification))
            .await
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::MessageSendFailed(e.to_string()))
            })?;
        Ok(())
    }
}

/// Only guild channels can be joined, so anything else is not found.
#[track_caller]
fn guild_channel_info(channel: ChannelId, found: Channel) -> Result<ChannelInfo, PlatformError> {
    match found {
        Channel::Guild(guild_channel) => Ok(ChannelInfo::new(channel, guild_channel.name)),
        _ => {
            debug!(%channel, "Not a guild channel");
            Err(PlatformError::new(PlatformErrorKind::ChannelNotFound(channel.0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_message_channel_is_not_found() {
        let dm: Channel = serde_json::from_value(serde_json::json!({
            "id": "5",
            "type": 1,
            "last_message_id": null,
            "recipients": [{
                "id": "200",
                "username": "bob",
                "discriminator": "0",
                "global_name": null,
                "avatar": null
            }]
        }))
        .unwrap();

        let err = guild_channel_info(ChannelId(5), dm).unwrap_err();
        assert_eq!(err.kind, PlatformErrorKind::ChannelNotFound(5));
    }
}
