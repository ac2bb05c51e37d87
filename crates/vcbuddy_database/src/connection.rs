//! Database connection utilities.

use crate::DatabaseResult;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};
use vcbuddy_error::{DatabaseError, DatabaseErrorKind};

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open the SQLite database at `database_url` and bring its schema up to date.
///
/// The file is created if it does not exist. `":memory:"` opens a private
/// in-memory database.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - A migration fails to apply
pub fn establish_connection(database_url: &str) -> DatabaseResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

    for version in &applied {
        debug!(%version, "Applied migration");
    }
    info!(database_url, migrations = applied.len(), "Database ready");

    Ok(conn)
}
