//! Conversions between Serenity models and vcbuddy core types.
//!
//! Discord snowflakes are never zero, so Serenity ids wrap `NonZeroU64`.
//! Core ids are plain `u64` and a zero id coming back from storage is
//! reported as not found instead of panicking inside Serenity.

use serenity::all::{
    ChannelId as SerenityChannelId, CreateEmbed, CreateEmbedAuthor, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, GuildId as SerenityGuildId,
    UserId as SerenityUserId, VoiceState,
};
use std::num::NonZeroU64;
use vcbuddy_core::{ChannelId, GuildId, Notification, UserId, VoiceJoin};
use vcbuddy_error::{PlatformError, PlatformErrorKind};
use vcbuddy_notify::Reply;

/// Serenity user id for a core user id.
///
/// # Errors
///
/// Returns `UserNotFound` for the zero id.
#[track_caller]
pub fn to_serenity_user(id: UserId) -> Result<SerenityUserId, PlatformError> {
    NonZeroU64::new(id.0)
        .map(SerenityUserId::from)
        .ok_or_else(|| PlatformError::new(PlatformErrorKind::UserNotFound(id.0)))
}

/// Serenity channel id for a core channel id.
///
/// # Errors
///
/// Returns `ChannelNotFound` for the zero id.
#[track_caller]
pub fn to_serenity_channel(id: ChannelId) -> Result<SerenityChannelId, PlatformError> {
    NonZeroU64::new(id.0)
        .map(SerenityChannelId::from)
        .ok_or_else(|| PlatformError::new(PlatformErrorKind::ChannelNotFound(id.0)))
}

/// Serenity guild id for a core guild id.
///
/// # Errors
///
/// Returns `GuildNotFound` for the zero id.
#[track_caller]
pub fn to_serenity_guild(id: GuildId) -> Result<SerenityGuildId, PlatformError> {
    NonZeroU64::new(id.0)
        .map(SerenityGuildId::from)
        .ok_or_else(|| PlatformError::new(PlatformErrorKind::GuildNotFound(id.0)))
}

/// Core voice update from the old and new gateway voice states.
///
/// `old` is what the cache held before the update, so it is the source of
/// the previous channel.
pub fn voice_join(old: Option<&VoiceState>, new: &VoiceState) -> VoiceJoin {
    VoiceJoin {
        user_id: UserId(new.user_id.get()),
        channel_id: new.channel_id.map(|id| ChannelId(id.get())),
        guild_id: new.guild_id.map(|id| GuildId(id.get())),
        previous_channel_id: old
            .and_then(|state| state.channel_id)
            .map(|id| ChannelId(id.get())),
    }
}

/// Direct message carrying a join notification as an embed.
pub fn notification_message(notification: &Notification) -> CreateMessage {
    let mut author = CreateEmbedAuthor::new(notification.author_name());
    if let Some(icon) = notification.author_icon_url() {
        author = author.icon_url(icon);
    }

    let embed = CreateEmbed::new()
        .title(notification.title())
        .description(notification.body())
        .url(notification.url())
        .author(author);

    CreateMessage::new().embed(embed)
}

/// Interaction response for a command reply.
pub fn render_reply(reply: Reply) -> CreateInteractionResponse {
    let message = match reply {
        Reply::Text(content) => CreateInteractionResponseMessage::new().content(content),
        Reply::Embed { title, description } => CreateInteractionResponseMessage::new()
            .embed(CreateEmbed::new().title(title).description(description)),
    };
    CreateInteractionResponse::Message(message)
}
