//! SQLite repository for best friend links.

use crate::DatabaseResult;
use crate::models::{BestFriendRow, NewBestFriend};
use crate::schema::best_friends;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind as DieselErrorKind, Error as DieselError};
use diesel::sql_types::BigInt;
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};
use vcbuddy_core::{AddOutcome, BestFriendLink, UserId};
use vcbuddy_error::DatabaseError;
use vcbuddy_interface::RelationshipStore;

/// SQLite-backed [`RelationshipStore`].
///
/// Every statement runs while holding the connection lock, so concurrent
/// command handlers are serialized and the (owner, friend) primary key is
/// the single arbiter of duplicates.
///
/// # Example
/// ```no_run
/// use vcbuddy_database::{SqliteRelationshipStore, establish_connection};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let conn = establish_connection("database.db")?;
/// let store = SqliteRelationshipStore::new(conn);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SqliteRelationshipStore {
    conn: Arc<Mutex<SqliteConnection>>,
}

impl SqliteRelationshipStore {
    /// Wrap an established, migrated connection.
    pub fn new(conn: SqliteConnection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open and migrate a database, then wrap it.
    pub fn open(database_url: &str) -> DatabaseResult<Self> {
        crate::establish_connection(database_url).map(Self::new)
    }
}

#[async_trait]
impl RelationshipStore for SqliteRelationshipStore {
    #[instrument(skip(self), fields(owner = %link.owner(), friend = %link.friend()))]
    async fn add(&self, link: BestFriendLink) -> DatabaseResult<AddOutcome> {
        let mut conn = self.conn.lock().await;

        let result = diesel::insert_into(best_friends::table)
            .values(NewBestFriend::from(link))
            .execute(&mut *conn);

        match result {
            Ok(_) => {
                debug!("Stored best friend link");
                Ok(AddOutcome::Added)
            }
            Err(DieselError::DatabaseError(DieselErrorKind::UniqueViolation, _)) => {
                debug!("Best friend link already exists");
                Ok(AddOutcome::AlreadyExists)
            }
            Err(e) => {
                warn!(error = %e, "Failed to store best friend link");
                Err(DatabaseError::from(e))
            }
        }
    }

    #[instrument(skip(self), fields(owner = %link.owner(), friend = %link.friend()))]
    async fn remove(&self, link: BestFriendLink) -> DatabaseResult<usize> {
        let mut conn = self.conn.lock().await;

        let owner = link.owner().to_string();
        let friend = link.friend().to_string();

        let removed = diesel::delete(
            best_friends::table
                .filter(best_friends::owner_id.eq(&owner))
                .filter(best_friends::friend_id.eq(&friend)),
        )
        .execute(&mut *conn)
        .map_err(DatabaseError::from)?;

        debug!(removed, "Removed best friend link");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn list_by_owner(&self, owner: UserId) -> DatabaseResult<Vec<UserId>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<BestFriendRow> = best_friends::table
            .filter(best_friends::owner_id.eq(owner.to_string()))
            .select(BestFriendRow::as_select())
            .order(sql::<BigInt>("rowid"))
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter()
            .map(|row| BestFriendLink::try_from(row).map(|link| *link.friend()))
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_by_friend(&self, friend: UserId) -> DatabaseResult<Vec<UserId>> {
        let mut conn = self.conn.lock().await;

        let rows: Vec<BestFriendRow> = best_friends::table
            .filter(best_friends::friend_id.eq(friend.to_string()))
            .select(BestFriendRow::as_select())
            .order(sql::<BigInt>("rowid"))
            .load(&mut *conn)
            .map_err(DatabaseError::from)?;

        rows.into_iter()
            .map(|row| BestFriendLink::try_from(row).map(|link| *link.owner()))
            .collect()
    }
}
