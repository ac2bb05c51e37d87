//! Grace period before acting on a voice join.

use crate::{DispatchReport, NotificationEngine};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{Instrument, debug, info, info_span};
use vcbuddy_core::JoinEvent;
use vcbuddy_interface::PresenceOracle;

/// How long a user must stay in a channel before friends are told.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(60);

/// How a debounced join ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The user stayed; the engine ran.
    Dispatched(DispatchReport),
    /// The user left or moved before the grace period ended.
    Discarded,
    /// Shutdown began while the join was pending.
    Cancelled,
}

/// Defers each join by a fixed grace period, then re-checks presence.
///
/// Every join is debounced in its own task, so rapid channel hopping yields
/// independent checks and only the join whose channel still matches the
/// user's presence goes on to the engine.
pub struct JoinDebouncer {
    grace: Duration,
    presence: Arc<dyn PresenceOracle>,
    engine: Arc<NotificationEngine>,
    shutdown: watch::Sender<bool>,
}

impl JoinDebouncer {
    /// Create a debouncer that waits `grace` before re-checking.
    pub fn new(
        engine: Arc<NotificationEngine>,
        presence: Arc<dyn PresenceOracle>,
        grace: Duration,
    ) -> Self {
        let (shutdown, _) = watch::channel(false);
        Self {
            grace,
            presence,
            engine,
            shutdown,
        }
    }

    /// Configured grace period.
    pub fn grace(&self) -> Duration {
        self.grace
    }

    /// Start debouncing `event` without waiting for it.
    ///
    /// Returns `None` once [`shutdown`](Self::shutdown) has been called; the
    /// event is dropped.
    pub fn schedule(&self, event: JoinEvent) -> Option<JoinHandle<Settlement>> {
        if *self.shutdown.borrow() {
            debug!(user_id = %event.user_id(), "Shutting down, dropping join");
            return None;
        }

        let grace = self.grace;
        let presence = Arc::clone(&self.presence);
        let engine = Arc::clone(&self.engine);
        let stop = self.shutdown.subscribe();
        let span = info_span!(
            "debounce",
            user_id = %event.user_id(),
            channel_id = %event.channel_id()
        );

        let task = async move {
            tokio::select! {
                _ = tokio::time::sleep(grace) => {}
                _ = stopped(stop) => {
                    debug!("Pending join abandoned");
                    return Settlement::Cancelled;
                }
            }

            match presence.current_voice_presence(*event.user_id()).await {
                Some(current) if current.is_in(*event.channel_id()) => {
                    info!("User stayed in channel");
                    Settlement::Dispatched(engine.process(&event).await)
                }
                current => {
                    debug!(?current, "User no longer in joined channel");
                    Settlement::Discarded
                }
            }
        };

        Some(tokio::spawn(task.instrument(span)))
    }

    /// Abandon every pending join and refuse new ones.
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }
}

/// Resolves once shutdown is signalled or the debouncer is dropped.
async fn stopped(mut stop: watch::Receiver<bool>) {
    let _ = stop.wait_for(|stopped| *stopped).await;
}
