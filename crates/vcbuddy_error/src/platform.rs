//! Chat platform collaborator error types.

/// Failures reported by the chat platform collaborator.
///
/// Ids are raw Discord snowflakes so this crate stays independent of the
/// domain types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlatformErrorKind {
    /// User could not be resolved.
    #[display("User not found: {_0}")]
    UserNotFound(u64),

    /// Channel could not be resolved.
    #[display("Channel not found: {_0}")]
    ChannelNotFound(u64),

    /// Guild could not be resolved.
    #[display("Guild not found: {_0}")]
    GuildNotFound(u64),

    /// Opening a direct-message channel failed.
    #[display("Direct channel failed: {_0}")]
    DirectChannel(String),

    /// Message failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Any other API failure (HTTP, gateway, rate limit).
    #[display("Platform API error: {_0}")]
    Api(String),
}

/// Platform error with source location tracking.
///
/// # Examples
///
/// ```
/// use vcbuddy_error::{PlatformError, PlatformErrorKind};
///
/// let err = PlatformError::new(PlatformErrorKind::UserNotFound(42));
/// assert_eq!(err.kind, PlatformErrorKind::UserNotFound(42));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    /// The kind of error that occurred
    pub kind: PlatformErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
