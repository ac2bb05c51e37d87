//! Fake collaborators shared by the notification tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use vcbuddy_core::{
    AddOutcome, BestFriendLink, ChannelId, ChannelInfo, GuildId, GuildInfo, Notification, UserId,
    UserInfo, VoicePresence,
};
use vcbuddy_database::SqliteRelationshipStore;
use vcbuddy_error::{DatabaseError, DatabaseErrorKind, PlatformError, PlatformErrorKind};
use vcbuddy_interface::{ChatPlatform, PresenceOracle, RelationshipStore};

pub const GUILD: GuildId = GuildId(1);
pub const GENERAL: ChannelId = ChannelId(10);
pub const GAMING: ChannelId = ChannelId(11);

/// Offset between a user id and their direct-message channel id.
const DM_OFFSET: u64 = 1_000_000;

#[derive(Default)]
struct PlatformState {
    users: HashMap<UserId, UserInfo>,
    members: HashSet<(GuildId, UserId)>,
    broken_dms: HashSet<UserId>,
    broken_sends: HashSet<UserId>,
    sent: Vec<(UserId, Notification)>,
}

/// In-memory chat platform that records every message it sends.
#[derive(Default)]
pub struct FakePlatform {
    state: Mutex<PlatformState>,
}

impl FakePlatform {
    /// Register a user who belongs to `GUILD`.
    pub fn member(&self, id: UserId, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(id, UserInfo::new(id, name, None));
        state.members.insert((GUILD, id));
    }

    /// Register a user who is not in `GUILD`.
    pub fn outsider(&self, id: UserId, name: &str) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(id, UserInfo::new(id, name, None));
    }

    pub fn break_dm(&self, id: UserId) {
        self.state.lock().unwrap().broken_dms.insert(id);
    }

    pub fn break_send(&self, id: UserId) {
        self.state.lock().unwrap().broken_sends.insert(id);
    }

    /// Recipients of sent messages, in send order.
    pub fn recipients(&self) -> Vec<UserId> {
        self.state.lock().unwrap().sent.iter().map(|(to, _)| *to).collect()
    }

    pub fn sent(&self) -> Vec<(UserId, Notification)> {
        self.state.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl ChatPlatform for FakePlatform {
    async fn resolve_user(&self, user: UserId) -> Result<UserInfo, PlatformError> {
        self.state
            .lock()
            .unwrap()
            .users
            .get(&user)
            .cloned()
            .ok_or_else(|| PlatformError::new(PlatformErrorKind::UserNotFound(user.0)))
    }

    async fn resolve_channel(&self, channel: ChannelId) -> Result<ChannelInfo, PlatformError> {
        match channel {
            GENERAL => Ok(ChannelInfo::new(GENERAL, "general")),
            GAMING => Ok(ChannelInfo::new(GAMING, "gaming")),
            other => Err(PlatformError::new(PlatformErrorKind::ChannelNotFound(other.0))),
        }
    }

    async fn resolve_guild(&self, guild: GuildId) -> Result<GuildInfo, PlatformError> {
        if guild == GUILD {
            Ok(GuildInfo::new(GUILD, "Hangout"))
        } else {
            Err(PlatformError::new(PlatformErrorKind::GuildNotFound(guild.0)))
        }
    }

    async fn guild_membership(&self, guild: GuildId, user: UserId) -> Result<bool, PlatformError> {
        Ok(self.state.lock().unwrap().members.contains(&(guild, user)))
    }

    async fn open_direct_channel(&self, user: UserId) -> Result<ChannelId, PlatformError> {
        if self.state.lock().unwrap().broken_dms.contains(&user) {
            return Err(PlatformError::new(PlatformErrorKind::DirectChannel(
                "cannot message this user".to_string(),
            )));
        }
        Ok(ChannelId(user.0 + DM_OFFSET))
    }

    async fn send_message(
        &self,
        channel: ChannelId,
        notification: &Notification,
    ) -> Result<(), PlatformError> {
        let recipient = UserId(channel.0 - DM_OFFSET);
        let mut state = self.state.lock().unwrap();
        if state.broken_sends.contains(&recipient) {
            return Err(PlatformError::new(PlatformErrorKind::MessageSendFailed(
                "missing access".to_string(),
            )));
        }
        state.sent.push((recipient, notification.clone()));
        Ok(())
    }
}

/// Voice presence that tests move users around in.
#[derive(Default)]
pub struct FakePresence {
    voice: Mutex<HashMap<UserId, VoicePresence>>,
}

impl FakePresence {
    pub fn join(&self, user: UserId, channel_id: ChannelId) {
        self.voice.lock().unwrap().insert(
            user,
            VoicePresence {
                channel_id,
                guild_id: GUILD,
            },
        );
    }

    pub fn leave(&self, user: UserId) {
        self.voice.lock().unwrap().remove(&user);
    }
}

#[async_trait]
impl PresenceOracle for FakePresence {
    async fn current_voice_presence(&self, user: UserId) -> Option<VoicePresence> {
        self.voice.lock().unwrap().get(&user).copied()
    }
}

/// Store whose every call fails.
pub struct BrokenStore;

#[async_trait]
impl RelationshipStore for BrokenStore {
    async fn add(&self, _link: BestFriendLink) -> Result<AddOutcome, DatabaseError> {
        Err(broken())
    }

    async fn remove(&self, _link: BestFriendLink) -> Result<usize, DatabaseError> {
        Err(broken())
    }

    async fn list_by_owner(&self, _owner: UserId) -> Result<Vec<UserId>, DatabaseError> {
        Err(broken())
    }

    async fn find_by_friend(&self, _friend: UserId) -> Result<Vec<UserId>, DatabaseError> {
        Err(broken())
    }
}

fn broken() -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Query("disk I/O error".to_string()))
}

pub fn memory_store() -> Arc<SqliteRelationshipStore> {
    Arc::new(SqliteRelationshipStore::open(":memory:").expect("in-memory database"))
}
