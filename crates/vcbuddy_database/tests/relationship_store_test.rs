//! Tests for the SQLite relationship store.

use vcbuddy_core::{AddOutcome, BestFriendLink, UserId};
use vcbuddy_database::SqliteRelationshipStore;
use vcbuddy_error::DatabaseErrorKind;
use vcbuddy_interface::RelationshipStore;

const A: UserId = UserId(100);
const B: UserId = UserId(200);
const C: UserId = UserId(300);
const D: UserId = UserId(400);

fn store() -> SqliteRelationshipStore {
    SqliteRelationshipStore::open(":memory:").expect("in-memory database")
}

#[tokio::test]
async fn test_add_then_list() {
    let store = store();

    let outcome = store.add(BestFriendLink::new(A, B)).await.unwrap();

    assert_eq!(outcome, AddOutcome::Added);
    assert_eq!(store.list_by_owner(A).await.unwrap(), vec![B]);
}

#[tokio::test]
async fn test_duplicate_add_reports_already_exists() {
    let store = store();

    assert_eq!(store.add(BestFriendLink::new(A, B)).await.unwrap(), AddOutcome::Added);
    assert_eq!(
        store.add(BestFriendLink::new(A, B)).await.unwrap(),
        AddOutcome::AlreadyExists
    );

    // Still exactly one row
    assert_eq!(store.list_by_owner(A).await.unwrap(), vec![B]);
}

#[tokio::test]
async fn test_links_are_directed() {
    let store = store();
    store.add(BestFriendLink::new(A, B)).await.unwrap();

    assert_eq!(
        store.add(BestFriendLink::new(B, A)).await.unwrap(),
        AddOutcome::Added
    );
    assert_eq!(store.list_by_owner(B).await.unwrap(), vec![A]);
}

#[tokio::test]
async fn test_remove_absent_pair_is_zero() {
    let store = store();
    store.add(BestFriendLink::new(A, B)).await.unwrap();

    let removed = store.remove(BestFriendLink::new(A, C)).await.unwrap();

    assert_eq!(removed, 0);
    assert_eq!(store.list_by_owner(A).await.unwrap(), vec![B]);
}

#[tokio::test]
async fn test_remove_existing_pair() {
    let store = store();
    store.add(BestFriendLink::new(A, B)).await.unwrap();
    store.add(BestFriendLink::new(A, C)).await.unwrap();

    assert_eq!(store.remove(BestFriendLink::new(A, B)).await.unwrap(), 1);
    assert_eq!(store.list_by_owner(A).await.unwrap(), vec![C]);
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let store = store();
    for friend in [D, B, C] {
        store.add(BestFriendLink::new(A, friend)).await.unwrap();
    }

    let first = store.list_by_owner(A).await.unwrap();
    let second = store.list_by_owner(A).await.unwrap();

    assert_eq!(first, vec![D, B, C]);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_for_unknown_owner_is_empty() {
    let store = store();
    assert!(store.list_by_owner(A).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_friend_returns_owners() {
    let store = store();
    store.add(BestFriendLink::new(A, B)).await.unwrap();
    store.add(BestFriendLink::new(C, B)).await.unwrap();
    store.add(BestFriendLink::new(C, D)).await.unwrap();

    assert_eq!(store.find_by_friend(B).await.unwrap(), vec![A, C]);
    assert_eq!(store.find_by_friend(D).await.unwrap(), vec![C]);
    assert!(store.find_by_friend(A).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_duplicate_adds_store_one_row() {
    let store = store();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.add(BestFriendLink::new(A, B)).await })
        })
        .collect();

    let mut added = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap() == AddOutcome::Added {
            added += 1;
        }
    }

    assert_eq!(added, 1);
    assert_eq!(store.list_by_owner(A).await.unwrap(), vec![B]);
}

#[tokio::test]
async fn test_links_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vcbuddy.db");
    let url = path.to_str().unwrap();

    {
        let store = SqliteRelationshipStore::open(url).unwrap();
        store.add(BestFriendLink::new(A, B)).await.unwrap();
    }

    let reopened = SqliteRelationshipStore::open(url).unwrap();
    assert_eq!(reopened.list_by_owner(A).await.unwrap(), vec![B]);
}

#[test]
fn test_unopenable_path_is_connection_error() {
    let result = SqliteRelationshipStore::open("/nonexistent-vcbuddy-dir/friends.db");

    match result {
        Err(err) => assert!(matches!(err.kind, DatabaseErrorKind::Connection(_))),
        Ok(_) => panic!("expected a connection error"),
    }
}
