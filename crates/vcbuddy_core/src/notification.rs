//! Outbound join notification.

use crate::{ChannelId, ChannelInfo, GuildId, GuildInfo, UserInfo};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Deep link that opens a guild channel in the Discord client.
pub fn channel_url(guild_id: GuildId, channel_id: ChannelId) -> String {
    format!("https://discord.com/channels/{guild_id}/{channel_id}")
}

/// A rich message telling an owner that a friend joined voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Notification {
    title: String,
    body: String,
    author_name: String,
    author_icon_url: Option<String>,
    url: String,
}

impl Notification {
    /// Compose the notification for `user` joining `channel` in `guild`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcbuddy_core::{ChannelId, ChannelInfo, GuildId, GuildInfo, Notification, UserId, UserInfo};
    ///
    /// let user = UserInfo::new(UserId(1), "bea", None);
    /// let channel = ChannelInfo::new(ChannelId(2), "general");
    /// let guild = GuildInfo::new(GuildId(3), "Hangout");
    ///
    /// let note = Notification::for_join(&user, &channel, &guild);
    /// assert_eq!(note.title(), "Hangout");
    /// assert_eq!(note.body(), "bea joined general");
    /// assert_eq!(note.url(), "https://discord.com/channels/3/2");
    /// ```
    pub fn for_join(user: &UserInfo, channel: &ChannelInfo, guild: &GuildInfo) -> Self {
        Self {
            title: guild.name().clone(),
            body: format!("{} joined {}", user.name(), channel.name()),
            author_name: user.name().clone(),
            author_icon_url: user.avatar_url().clone(),
            url: channel_url(*guild.id(), *channel.id()),
        }
    }
}
