//! Core data types for vcbuddy.
//!
//! This crate provides the platform-independent vocabulary shared by the
//! relationship store, the notification engine and the Discord adapter.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decision;
mod event;
mod ids;
mod info;
mod invoker;
mod link;
mod notification;

pub use decision::{RecipientDecision, SkipReason};
pub use event::{JoinEvent, VoiceJoin, VoicePresence};
pub use ids::{ChannelId, GuildId, UserId};
pub use info::{ChannelInfo, GuildInfo, UserInfo};
pub use invoker::Invoker;
pub use link::{AddOutcome, BestFriendLink};
pub use notification::{Notification, channel_url};
