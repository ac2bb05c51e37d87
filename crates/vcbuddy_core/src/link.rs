//! Best friend subscription.

use crate::UserId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A directed "notify me" subscription.
///
/// `owner` is told whenever `friend` joins a voice channel. The relation is
/// not symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct BestFriendLink {
    owner: UserId,
    friend: UserId,
}

impl BestFriendLink {
    /// Create a link from owner to friend.
    pub fn new(owner: UserId, friend: UserId) -> Self {
        Self { owner, friend }
    }
}

/// Result of adding a best friend link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AddOutcome {
    /// A new link was stored.
    #[display("added")]
    Added,
    /// The owner already had this friend; nothing was written.
    #[display("already exists")]
    AlreadyExists,
}
