//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError};

/// Every error a vcbuddy component can surface.
///
/// # Examples
///
/// ```
/// use vcbuddy_error::{ConfigError, VcbuddyError};
///
/// let err: VcbuddyError = ConfigError::new("bad grace period").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VcbuddyErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// vcbuddy error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("vcbuddy Error: {}", _0)]
pub struct VcbuddyError(Box<VcbuddyErrorKind>);

impl VcbuddyError {
    /// Create a new error from a kind.
    pub fn new(kind: VcbuddyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VcbuddyErrorKind {
        &self.0
    }
}

impl<T> From<T> for VcbuddyError
where
    T: Into<VcbuddyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for vcbuddy operations.
pub type VcbuddyResult<T> = std::result::Result<T, VcbuddyError>;
