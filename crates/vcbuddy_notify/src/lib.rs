//! Join notification core for vcbuddy.
//!
//! Three components live here, each depending only on the collaborator
//! traits from `vcbuddy_interface`:
//! - **JoinDebouncer**: holds each voice join for a grace period and drops
//!   it if the user did not stay in the channel
//! - **NotificationEngine**: turns a settled join into one direct message per
//!   eligible best friend owner
//! - **CommandHandlers**: the `add`, `remove` and `list` best friend commands

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commands;
mod debounce;
mod engine;

pub use commands::{BestFriendCommand, COMMAND_NAME, CommandHandlers, CommandName, Reply};
pub use debounce::{DEFAULT_GRACE_PERIOD, JoinDebouncer, Settlement};
pub use engine::{DispatchReport, NotificationEngine};
