//! Error types for vcbuddy.
//!
//! This crate provides the error types shared across the vcbuddy workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vcbuddy_error::{ConfigError, VcbuddyResult};
//!
//! fn load_token() -> VcbuddyResult<String> {
//!     Err(ConfigError::new("BOT_TOKEN is not set"))?
//! }
//!
//! assert!(load_token().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod command;
mod config;
mod database;
mod error;
mod platform;

pub use command::{CommandError, CommandErrorKind};
pub use config::ConfigError;
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{VcbuddyError, VcbuddyErrorKind, VcbuddyResult};
pub use platform::{PlatformError, PlatformErrorKind};
