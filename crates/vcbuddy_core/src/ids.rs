//! Discord snowflake newtypes.
//!
//! Snowflakes are persisted as decimal text, so every id parses from and
//! displays as its decimal form.

use serde::{Deserialize, Serialize};

/// Identifier of a Discord user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct UserId(pub u64);

/// Identifier of a Discord channel (voice, text or direct message).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct ChannelId(pub u64);

/// Identifier of a Discord guild.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
pub struct GuildId(pub u64);

impl UserId {
    /// Mention markup for this user, e.g. `<@42>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.0)
    }
}
