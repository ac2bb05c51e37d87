//! Notification dispatch for settled joins.

use derive_getters::Getters;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use vcbuddy_core::{
    GuildId, JoinEvent, Notification, RecipientDecision, SkipReason, UserId,
};
use vcbuddy_error::PlatformError;
use vcbuddy_interface::{ChatPlatform, PresenceOracle, RelationshipStore};

/// What happened to each candidate of one join event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct DispatchReport {
    /// Decision per candidate, in store order
    decisions: Vec<RecipientDecision>,
    /// Candidates whose notification was sent
    delivered: Vec<UserId>,
    /// Candidates selected for notification whose delivery failed
    failed: Vec<UserId>,
}

impl DispatchReport {
    /// Number of messages actually sent.
    pub fn sent(&self) -> usize {
        self.delivered.len()
    }
}

/// Turns a settled [`JoinEvent`] into direct messages.
///
/// Candidates are the owners who registered the joining user as a best
/// friend. Each candidate is evaluated and messaged independently: a failed
/// lookup or send for one never stops the rest.
pub struct NotificationEngine {
    store: Arc<dyn RelationshipStore>,
    presence: Arc<dyn PresenceOracle>,
    platform: Arc<dyn ChatPlatform>,
}

impl NotificationEngine {
    /// Create an engine from its collaborators.
    pub fn new(
        store: Arc<dyn RelationshipStore>,
        presence: Arc<dyn PresenceOracle>,
        platform: Arc<dyn ChatPlatform>,
    ) -> Self {
        Self {
            store,
            presence,
            platform,
        }
    }

    /// Notify every eligible owner about `event`.
    ///
    /// Returns an empty report when the joining user, channel or guild
    /// cannot be resolved, or when the store cannot be queried.
    #[instrument(
        skip(self, event),
        fields(
            user_id = %event.user_id(),
            channel_id = %event.channel_id(),
            guild_id = %event.guild_id(),
            candidates,
            sent
        )
    )]
    pub async fn process(&self, event: &JoinEvent) -> DispatchReport {
        let mut report = DispatchReport::default();

        let Some(notification) = self.compose(event).await else {
            return report;
        };

        let candidates = match self.store.find_by_friend(*event.user_id()).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, "Failed to look up best friend owners");
                return report;
            }
        };
        tracing::Span::current().record("candidates", candidates.len());

        for candidate in candidates {
            let decision = self.decide(candidate, *event.guild_id()).await;
            report.decisions.push(decision);

            if let RecipientDecision::Skip(_, reason) = decision {
                debug!(candidate = %candidate, %reason, "Skipping candidate");
                continue;
            }

            match self.deliver(candidate, &notification).await {
                Ok(()) => {
                    debug!(candidate = %candidate, "Sent join notification");
                    report.delivered.push(candidate);
                }
                Err(e) => {
                    warn!(candidate = %candidate, error = %e, "Failed to deliver join notification");
                    report.failed.push(candidate);
                }
            }
        }

        tracing::Span::current().record("sent", report.sent());
        info!(sent = report.sent(), failed = report.failed.len(), "Processed join");
        report
    }

    /// Resolve display metadata and build the message, or give up.
    async fn compose(&self, event: &JoinEvent) -> Option<Notification> {
        let user = self
            .platform
            .resolve_user(*event.user_id())
            .await
            .map_err(|e| warn!(error = %e, "Failed to resolve joining user"))
            .ok()?;
        let channel = self
            .platform
            .resolve_channel(*event.channel_id())
            .await
            .map_err(|e| warn!(error = %e, "Failed to resolve voice channel"))
            .ok()?;
        let guild = self
            .platform
            .resolve_guild(*event.guild_id())
            .await
            .map_err(|e| warn!(error = %e, "Failed to resolve guild"))
            .ok()?;

        debug!(user = %user.name(), channel = %channel.name(), "Composing join notification");
        Some(Notification::for_join(&user, &channel, &guild))
    }

    /// Decide whether `candidate` should hear about a join in `guild_id`.
    async fn decide(&self, candidate: UserId, guild_id: GuildId) -> RecipientDecision {
        if let Err(e) = self.platform.resolve_user(candidate).await {
            warn!(candidate = %candidate, error = %e, "Failed to resolve candidate");
            return RecipientDecision::Skip(candidate, SkipReason::UnresolvableUser);
        }

        if self.presence.current_voice_presence(candidate).await.is_some() {
            return RecipientDecision::Skip(candidate, SkipReason::InVoice);
        }

        match self.platform.guild_membership(guild_id, candidate).await {
            Ok(true) => RecipientDecision::Notify(candidate),
            Ok(false) => RecipientDecision::Skip(candidate, SkipReason::NotGuildMember),
            Err(e) => {
                debug!(candidate = %candidate, error = %e, "Membership lookup failed");
                RecipientDecision::Skip(candidate, SkipReason::NotGuildMember)
            }
        }
    }

    async fn deliver(
        &self,
        candidate: UserId,
        notification: &Notification,
    ) -> Result<(), PlatformError> {
        let direct = self.platform.open_direct_channel(candidate).await?;
        self.platform.send_message(direct, notification).await
    }
}
