//! Per-candidate notification decisions.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// Why a candidate does not get a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum SkipReason {
    /// The candidate's user record could not be resolved.
    #[display("user could not be resolved")]
    UnresolvableUser,
    /// The candidate is already connected to a voice channel.
    #[display("already in a voice channel")]
    InVoice,
    /// The candidate is not a member of the guild the join happened in.
    #[display("not a member of the guild")]
    NotGuildMember,
}

/// Outcome of evaluating one candidate for one join event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecipientDecision {
    /// Candidate is absent from voice and reachable in the guild.
    Notify(UserId),
    /// Candidate is filtered out.
    Skip(UserId, SkipReason),
}

impl RecipientDecision {
    /// The candidate this decision is about.
    pub fn candidate(&self) -> UserId {
        match self {
            Self::Notify(id) | Self::Skip(id, _) => *id,
        }
    }

    /// Whether the candidate should be messaged.
    pub fn is_notify(&self) -> bool {
        matches!(self, Self::Notify(_))
    }
}
