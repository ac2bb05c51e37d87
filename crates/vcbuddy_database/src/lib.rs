//! SQLite integration for vcbuddy.
//!
//! This crate provides the schema, embedded migrations and the
//! [`SqliteRelationshipStore`] that persists best friend links.
//!
//! # Example
//!
//! ```rust,ignore
//! use vcbuddy_database::{SqliteRelationshipStore, establish_connection};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let conn = establish_connection("database.db")?;
//! let store = SqliteRelationshipStore::new(conn);
//! # Ok(())
//! # }
//! ```

mod connection;
mod models;
mod relationship_repository;

pub mod schema;

pub use connection::{MIGRATIONS, establish_connection};
pub use models::{BestFriendRow, NewBestFriend};
pub use relationship_repository::SqliteRelationshipStore;

use vcbuddy_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
