//! Identity of whoever invoked a command.

use crate::UserId;
use vcbuddy_error::{CommandError, CommandErrorKind};

/// Identity contexts attached to an incoming command.
///
/// Commands sent in a direct message carry a user; commands sent in a guild
/// carry a member. At least one is expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Invoker {
    /// Direct user context
    pub user: Option<UserId>,
    /// Guild member context
    pub member: Option<UserId>,
}

impl Invoker {
    /// Normalize the contexts into one identity.
    ///
    /// Prefers the direct user context. Fails rather than yielding an empty
    /// identity when neither context is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use vcbuddy_core::{Invoker, UserId};
    ///
    /// let from_guild = Invoker { user: None, member: Some(UserId(5)) };
    /// assert_eq!(from_guild.resolve().unwrap(), UserId(5));
    /// assert!(Invoker::default().resolve().is_err());
    /// ```
    #[track_caller]
    pub fn resolve(&self) -> Result<UserId, CommandError> {
        self.user
            .or(self.member)
            .ok_or_else(|| CommandError::new(CommandErrorKind::MissingInvoker))
    }
}
