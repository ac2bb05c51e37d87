//! Best friend list commands.
//!
//! The handlers translate `add`, `remove` and `list` into relationship store
//! calls and produce a short reply. Storage failures are logged with detail
//! and answered with a generic message; internal error text never reaches
//! the user.

use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use vcbuddy_core::{AddOutcome, BestFriendLink, Invoker, UserId};
use vcbuddy_error::{CommandError, CommandErrorKind};
use vcbuddy_interface::RelationshipStore;

/// Name of the top-level slash command.
pub const COMMAND_NAME: &str = "best_friend";

/// Subcommands of `best_friend`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum CommandName {
    /// Add a user to the invoker's list
    Add,
    /// Remove a user from the invoker's list
    Remove,
    /// Show the invoker's list
    List,
}

impl CommandName {
    /// Help text shown in the client.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Add => "Add a user to the best friends list to get notified when they join VC",
            Self::Remove => "Remove a user from the best friends list",
            Self::List => "List best friends",
        }
    }

    /// Whether the subcommand takes a target user.
    pub fn takes_target(&self) -> bool {
        matches!(self, Self::Add | Self::Remove)
    }
}

/// A parsed `best_friend` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestFriendCommand {
    /// Which subcommand was used
    pub name: CommandName,
    /// Who sent it
    pub invoker: Invoker,
    /// The `user-option` value, for `add` and `remove`
    pub target: Option<UserId>,
}

impl BestFriendCommand {
    /// Build a command from its raw subcommand name.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCommand` if `subcommand` is not `add`, `remove` or `list`.
    #[track_caller]
    pub fn parse(
        subcommand: &str,
        invoker: Invoker,
        target: Option<UserId>,
    ) -> Result<Self, CommandError> {
        let name = CommandName::from_str(subcommand).map_err(|_| {
            CommandError::new(CommandErrorKind::UnknownCommand(subcommand.to_string()))
        })?;
        Ok(Self {
            name,
            invoker,
            target,
        })
    }
}

/// What to send back to the invoker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain text
    Text(String),
    /// Rich embed
    Embed {
        /// Embed title
        title: String,
        /// Embed body
        description: String,
    },
}

impl Reply {
    fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    fn embed(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Embed {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Handlers for the `best_friend` subcommands.
#[derive(Clone)]
pub struct CommandHandlers {
    store: Arc<dyn RelationshipStore>,
}

impl CommandHandlers {
    /// Create handlers backed by `store`.
    pub fn new(store: Arc<dyn RelationshipStore>) -> Self {
        Self { store }
    }

    /// Run a parsed command.
    #[instrument(skip(self), fields(command = %command.name))]
    pub async fn dispatch(&self, command: &BestFriendCommand) -> Reply {
        match (command.name, command.target) {
            (CommandName::Add, Some(target)) => self.add(&command.invoker, target).await,
            (CommandName::Remove, Some(target)) => self.remove(&command.invoker, target).await,
            (CommandName::List, _) => self.list(&command.invoker).await,
            (name, None) => {
                let err = CommandError::new(CommandErrorKind::MissingArgument {
                    command: name.to_string(),
                    arg_name: "user-option".to_string(),
                });
                warn!(error = %err, "Rejected command");
                Reply::text("Please choose a user.")
            }
        }
    }

    /// Add `target` to the invoker's list.
    #[instrument(skip(self))]
    pub async fn add(&self, invoker: &Invoker, target: UserId) -> Reply {
        let Some(owner) = identify(invoker) else {
            return unidentified();
        };

        match self.store.add(BestFriendLink::new(owner, target)).await {
            Ok(AddOutcome::Added) => {
                info!(%owner, %target, "Added best friend");
                Reply::embed(
                    "Added best friend",
                    format!("Added {} to your best friends list.", target.mention()),
                )
            }
            Ok(AddOutcome::AlreadyExists) => {
                Reply::text("You already have that user in your best friends list.")
            }
            Err(e) => {
                error!(%owner, %target, error = %e, "Error creating best friend");
                Reply::text("Error creating best friend")
            }
        }
    }

    /// Remove `target` from the invoker's list.
    #[instrument(skip(self))]
    pub async fn remove(&self, invoker: &Invoker, target: UserId) -> Reply {
        let Some(owner) = identify(invoker) else {
            return unidentified();
        };

        match self.store.remove(BestFriendLink::new(owner, target)).await {
            Ok(0) => Reply::text("You don't have that user in your best friends list."),
            Ok(_) => {
                info!(%owner, %target, "Removed best friend");
                Reply::embed(
                    "Removed best friend",
                    format!("Removed {} from your best friends list :(", target.mention()),
                )
            }
            Err(e) => {
                error!(%owner, %target, error = %e, "Error removing best friend");
                Reply::text("Error removing best friend")
            }
        }
    }

    /// Show the invoker's list in store order.
    #[instrument(skip(self))]
    pub async fn list(&self, invoker: &Invoker) -> Reply {
        let Some(owner) = identify(invoker) else {
            return unidentified();
        };

        match self.store.list_by_owner(owner).await {
            Ok(friends) if friends.is_empty() => Reply::text("You don't have any best friends. :'("),
            Ok(friends) => {
                let mut description = String::from("Your best friends are:\n");
                for friend in friends {
                    description.push_str(&friend.mention());
                    description.push('\n');
                }
                Reply::embed("Your best friends", description)
            }
            Err(e) => {
                error!(%owner, error = %e, "Error getting best friends");
                Reply::text("Error getting best friends")
            }
        }
    }
}

fn identify(invoker: &Invoker) -> Option<UserId> {
    invoker
        .resolve()
        .map_err(|e| error!(error = %e, "No user found for command"))
        .ok()
}

fn unidentified() -> Reply {
    Reply::text("Could not identify you.")
}
