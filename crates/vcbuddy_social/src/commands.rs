//! The `best_friend` slash command on Discord.

use crate::conversions::to_serenity_guild;
use crate::error::{DiscordError, DiscordErrorKind, DiscordResult};
use serenity::all::{
    Command, CommandDataOption, CommandDataOptionValue, CommandInteraction, CommandOptionType,
    CreateCommand, CreateCommandOption, Http,
};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use vcbuddy_core::{GuildId, Invoker, UserId};
use vcbuddy_error::{CommandError, CommandErrorKind};
use vcbuddy_notify::{BestFriendCommand, COMMAND_NAME, CommandName};

/// Name of the user argument of `add` and `remove`.
pub const USER_OPTION: &str = "user-option";

/// Where the command is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandScope {
    /// Only in one guild; changes show up immediately
    Guild(GuildId),
    /// In every guild the bot is in
    Global,
}

impl From<Option<GuildId>> for CommandScope {
    fn from(guild: Option<GuildId>) -> Self {
        guild.map_or(Self::Global, Self::Guild)
    }
}

/// Definition of the `best_friend` command and its subcommands.
pub fn best_friend_command() -> CreateCommand {
    CommandName::iter().fold(
        CreateCommand::new(COMMAND_NAME).description("Manage your best friends list"),
        |command, name| {
            let mut sub =
                CreateCommandOption::new(CommandOptionType::SubCommand, name.as_ref(), name.description());
            if name.takes_target() {
                sub = sub.add_sub_option(
                    CreateCommandOption::new(CommandOptionType::User, USER_OPTION, "User")
                        .required(true),
                );
            }
            command.add_option(sub)
        },
    )
}

/// Register `best_friend` in `scope`.
///
/// # Errors
///
/// Returns `CommandRegistration` if Discord rejects the command.
#[instrument(skip(http))]
pub async fn register(http: &Http, scope: CommandScope) -> DiscordResult<()> {
    let command = match scope {
        CommandScope::Guild(guild) => {
            guild_id(guild)?
                .create_command(http, best_friend_command())
                .await
        }
        CommandScope::Global => Command::create_global_command(http, best_friend_command()).await,
    }
    .map_err(registration_error)?;

    info!(command_id = %command.id, "Registered command");
    Ok(())
}

/// Delete every command the bot has in `scope`.
///
/// # Errors
///
/// Returns `CommandRegistration` if the commands cannot be listed or deleted.
#[instrument(skip(http))]
pub async fn unregister(http: &Http, scope: CommandScope) -> DiscordResult<()> {
    info!("Removing commands...");
    match scope {
        CommandScope::Guild(guild) => {
            let guild = guild_id(guild)?;
            for command in guild.get_commands(http).await.map_err(registration_error)? {
                guild
                    .delete_command(http, command.id)
                    .await
                    .map_err(registration_error)?;
                info!(command = %command.name, "Removed command");
            }
        }
        CommandScope::Global => {
            for command in Command::get_global_commands(http)
                .await
                .map_err(registration_error)?
            {
                Command::delete_global_command(http, command.id)
                    .await
                    .map_err(registration_error)?;
                info!(command = %command.name, "Removed command");
            }
        }
    }
    Ok(())
}

/// Parse a slash command interaction into a `best_friend` invocation.
///
/// # Errors
///
/// Returns `UnknownCommand` for other commands or an unknown subcommand.
#[track_caller]
pub fn parse_interaction(interaction: &CommandInteraction) -> Result<BestFriendCommand, CommandError> {
    if interaction.data.name != COMMAND_NAME {
        return Err(CommandError::new(CommandErrorKind::UnknownCommand(
            interaction.data.name.clone(),
        )));
    }
    let invoker = Invoker {
        user: interaction
            .guild_id
            .is_none()
            .then(|| UserId(interaction.user.id.get())),
        member: interaction
            .member
            .as_ref()
            .map(|member| UserId(member.user.id.get())),
    };
    parse_options(&interaction.data.options, invoker)
}

/// Parse the options of a `best_friend` command.
#[track_caller]
pub(crate) fn parse_options(
    options: &[CommandDataOption],
    invoker: Invoker,
) -> Result<BestFriendCommand, CommandError> {
    let Some(sub) = options.first() else {
        return Err(CommandError::new(CommandErrorKind::UnknownCommand(
            COMMAND_NAME.to_string(),
        )));
    };

    let target = match &sub.value {
        CommandDataOptionValue::SubCommand(args) => args.iter().find_map(|arg| match &arg.value {
            CommandDataOptionValue::User(user) if arg.name == USER_OPTION => {
                Some(UserId(user.get()))
            }
            _ => None,
        }),
        _ => {
            warn!(option = %sub.name, "Expected a subcommand");
            None
        }
    };

    BestFriendCommand::parse(&sub.name, invoker, target)
}

fn guild_id(guild: GuildId) -> DiscordResult<serenity::all::GuildId> {
    to_serenity_guild(guild)
        .map_err(|e| DiscordError::new(DiscordErrorKind::CommandRegistration(e.to_string())))
}

#[track_caller]
fn registration_error(err: serenity::Error) -> DiscordError {
    DiscordError::new(DiscordErrorKind::CommandRegistration(err.to_string()))
}
