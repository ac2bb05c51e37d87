//! Best friend row models.

use crate::schema::best_friends;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use vcbuddy_core::{BestFriendLink, UserId};
use vcbuddy_error::{DatabaseError, DatabaseErrorKind};

/// Database row for the best_friends table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = best_friends)]
#[diesel(primary_key(owner_id, friend_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BestFriendRow {
    /// Subscribing user, as decimal snowflake
    pub owner_id: String,
    /// Watched user, as decimal snowflake
    pub friend_id: String,
    /// When the link was stored
    pub created_at: NaiveDateTime,
}

impl TryFrom<BestFriendRow> for BestFriendLink {
    type Error = DatabaseError;

    fn try_from(row: BestFriendRow) -> Result<Self, Self::Error> {
        Ok(BestFriendLink::new(
            parse_user_id(&row.owner_id)?,
            parse_user_id(&row.friend_id)?,
        ))
    }
}

/// Insertable struct for the best_friends table.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = best_friends)]
pub struct NewBestFriend {
    /// Subscribing user
    pub owner_id: String,
    /// Watched user
    pub friend_id: String,
}

impl From<BestFriendLink> for NewBestFriend {
    fn from(link: BestFriendLink) -> Self {
        Self {
            owner_id: link.owner().to_string(),
            friend_id: link.friend().to_string(),
        }
    }
}

/// Decode a stored snowflake.
#[track_caller]
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, DatabaseError> {
    raw.parse().map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::CorruptRow(format!(
            "'{}' is not a user id",
            raw
        )))
    })
}
