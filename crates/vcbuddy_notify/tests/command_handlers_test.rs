//! Tests for the best friend command handlers.

mod common;

use common::{BrokenStore, memory_store};
use std::sync::Arc;
use vcbuddy_core::{Invoker, UserId};
use vcbuddy_notify::{BestFriendCommand, CommandHandlers, Reply};

const A: UserId = UserId(100);
const B: UserId = UserId(200);
const C: UserId = UserId(300);

fn from_guild(id: UserId) -> Invoker {
    Invoker {
        user: None,
        member: Some(id),
    }
}

fn from_dm(id: UserId) -> Invoker {
    Invoker {
        user: Some(id),
        member: None,
    }
}

fn text(content: &str) -> Reply {
    Reply::Text(content.to_string())
}

#[tokio::test]
async fn test_add_confirms_with_mention() {
    let handlers = CommandHandlers::new(memory_store());

    let reply = handlers.add(&from_guild(A), B).await;

    assert_eq!(
        reply,
        Reply::Embed {
            title: "Added best friend".to_string(),
            description: "Added <@200> to your best friends list.".to_string(),
        }
    );
}

#[tokio::test]
async fn test_second_add_reports_duplicate() {
    let handlers = CommandHandlers::new(memory_store());
    handlers.add(&from_guild(A), B).await;

    let reply = handlers.add(&from_dm(A), B).await;

    assert_eq!(
        reply,
        text("You already have that user in your best friends list.")
    );
    match handlers.list(&from_guild(A)).await {
        Reply::Embed { description, .. } => {
            assert_eq!(description, "Your best friends are:\n<@200>\n")
        }
        other => panic!("expected embed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_remove_unknown_friend() {
    let handlers = CommandHandlers::new(memory_store());
    handlers.add(&from_guild(A), B).await;

    let reply = handlers.remove(&from_guild(A), C).await;

    assert_eq!(
        reply,
        text("You don't have that user in your best friends list.")
    );
    assert!(matches!(handlers.list(&from_guild(A)).await, Reply::Embed { .. }));
}

#[tokio::test]
async fn test_remove_existing_friend() {
    let handlers = CommandHandlers::new(memory_store());
    handlers.add(&from_guild(A), B).await;

    let reply = handlers.remove(&from_guild(A), B).await;

    assert_eq!(
        reply,
        Reply::Embed {
            title: "Removed best friend".to_string(),
            description: "Removed <@200> from your best friends list :(".to_string(),
        }
    );
    assert_eq!(
        handlers.list(&from_guild(A)).await,
        text("You don't have any best friends. :'(")
    );
}

#[tokio::test]
async fn test_list_renders_in_store_order() {
    let handlers = CommandHandlers::new(memory_store());
    handlers.add(&from_guild(A), C).await;
    handlers.add(&from_guild(A), B).await;

    assert_eq!(
        handlers.list(&from_guild(A)).await,
        Reply::Embed {
            title: "Your best friends".to_string(),
            description: "Your best friends are:\n<@300>\n<@200>\n".to_string(),
        }
    );
}

#[tokio::test]
async fn test_store_errors_use_generic_replies() {
    let handlers = CommandHandlers::new(Arc::new(BrokenStore));

    assert_eq!(handlers.add(&from_guild(A), B).await, text("Error creating best friend"));
    assert_eq!(handlers.remove(&from_guild(A), B).await, text("Error removing best friend"));
    assert_eq!(handlers.list(&from_guild(A)).await, text("Error getting best friends"));
}

#[tokio::test]
async fn test_unidentified_invoker_is_rejected() {
    let store = memory_store();
    let handlers = CommandHandlers::new(store.clone());

    let reply = handlers.add(&Invoker::default(), B).await;

    assert_eq!(reply, text("Could not identify you."));
    assert_eq!(
        handlers.list(&Invoker::default()).await,
        text("Could not identify you.")
    );
}

#[tokio::test]
async fn test_dispatch_routes_subcommands() {
    let handlers = CommandHandlers::new(memory_store());

    let add = BestFriendCommand::parse("add", from_guild(A), Some(B)).unwrap();
    assert!(matches!(handlers.dispatch(&add).await, Reply::Embed { .. }));

    let list = BestFriendCommand::parse("list", from_guild(A), None).unwrap();
    assert_eq!(
        handlers.dispatch(&list).await,
        Reply::Embed {
            title: "Your best friends".to_string(),
            description: "Your best friends are:\n<@200>\n".to_string(),
        }
    );
}

#[tokio::test]
async fn test_dispatch_without_target_asks_for_user() {
    let handlers = CommandHandlers::new(memory_store());

    let remove = BestFriendCommand::parse("remove", from_guild(A), None).unwrap();

    assert_eq!(handlers.dispatch(&remove).await, text("Please choose a user."));
}
