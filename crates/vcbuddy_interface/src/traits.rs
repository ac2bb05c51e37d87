//! Collaborator traits consumed by the core.

use async_trait::async_trait;
use vcbuddy_core::{
    AddOutcome, BestFriendLink, ChannelId, ChannelInfo, GuildId, GuildInfo, Notification, UserId,
    UserInfo, VoicePresence,
};
use vcbuddy_error::{DatabaseError, PlatformError};

/// Durable store of best friend links.
///
/// Implementations must be safe under concurrent calls and must never store
/// the same (owner, friend) pair twice.
#[async_trait]
pub trait RelationshipStore: Send + Sync {
    /// Store a link. A duplicate pair yields `AddOutcome::AlreadyExists`.
    async fn add(&self, link: BestFriendLink) -> Result<AddOutcome, DatabaseError>;

    /// Delete a link, returning the number of rows removed (0 or 1).
    async fn remove(&self, link: BestFriendLink) -> Result<usize, DatabaseError>;

    /// Friends of `owner`, in insertion order.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<UserId>, DatabaseError>;

    /// Owners who want to hear about `friend`, in insertion order.
    async fn find_by_friend(&self, friend: UserId) -> Result<Vec<UserId>, DatabaseError>;
}

/// Answers "is this user in voice right now, and where".
#[async_trait]
pub trait PresenceOracle: Send + Sync {
    /// Current voice presence across every guild shared with the user.
    async fn current_voice_presence(&self, user: UserId) -> Option<VoicePresence>;
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Resolve a user's display metadata.
    async fn resolve_user(&self, user: UserId) -> Result<UserInfo, PlatformError>;

    /// Resolve a channel's display metadata.
    async fn resolve_channel(&self, channel: ChannelId) -> Result<ChannelInfo, PlatformError>;

    /// Resolve a guild's display metadata.
    async fn resolve_guild(&self, guild: GuildId) -> Result<GuildInfo, PlatformError>;

    /// Whether `user` is a member of `guild`.
    async fn guild_membership(&self, guild: GuildId, user: UserId) -> Result<bool, PlatformError>;

    /// Open (or reuse) a direct-message channel with `user`.
    async fn open_direct_channel(&self, user: UserId) -> Result<ChannelId, PlatformError>;

    /// Send a notification into `channel`.
    async fn send_message(
        &self,
        channel: ChannelId,
        notification: &Notification,
    ) -> Result<(), PlatformError>;
}
