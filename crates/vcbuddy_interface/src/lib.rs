//! Trait definitions for vcbuddy.
//!
//! The notification engine and command handlers only talk to the outside
//! world through these traits, so they can be exercised without a live
//! Discord connection or a database file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ChatPlatform, PresenceOracle, RelationshipStore};
