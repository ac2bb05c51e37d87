use clap::Parser;
use config::{Environment, Map};
use std::io::Write;
use std::time::Duration;
use vcbuddy::{BotConfig, Cli};
use vcbuddy_core::GuildId;

fn env(vars: &[(&str, &str)]) -> Environment {
    let source: Map<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    Environment::with_prefix("VCBUDDY")
        .try_parsing(true)
        .source(Some(source))
}

#[test]
fn test_bundled_defaults() {
    let config = BotConfig::defaults().expect("Bundled config parses");

    assert_eq!(config.database_url(), "sqlite://database.db");
    assert_eq!(config.database_path(), "database.db");
    assert_eq!(config.grace_period(), Duration::from_secs(60));
    assert!(*config.remove_commands());
    assert_eq!(config.guild(), None);
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    writeln!(file, "grace_period_secs = 5\nguild_id = 42").expect("Failed to write config");

    let config = BotConfig::load_from(Some(file.path()), env(&[])).expect("Config loads");

    assert_eq!(config.grace_period(), Duration::from_secs(5));
    assert_eq!(config.guild(), Some(GuildId(42)));
    assert_eq!(config.database_path(), "database.db");
}

#[test]
fn test_environment_overrides_files() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    writeln!(file, "grace_period_secs = 5").expect("Failed to write config");

    let config = BotConfig::load_from(
        Some(file.path()),
        env(&[
            ("VCBUDDY_GRACE_PERIOD_SECS", "30"),
            ("VCBUDDY_REMOVE_COMMANDS", "false"),
        ]),
    )
    .expect("Config loads");

    assert_eq!(config.grace_period(), Duration::from_secs(30));
    assert!(!*config.remove_commands());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = BotConfig::load_from(
        Some(std::path::Path::new("/nonexistent/vcbuddy-test.toml")),
        env(&[]),
    );
    assert!(result.is_err());
}

#[test]
fn test_flags_override_configuration() {
    let cli = Cli {
        guild: Some("7".to_string()),
        remove_commands: Some(false),
        database_url: Some("sqlite:///tmp/friends.db".to_string()),
        grace_secs: Some(0),
        ..Cli::default()
    };
    let config = BotConfig::defaults().unwrap();

    let settings = cli
        .merge(config, Some("token".to_string()))
        .expect("Settings resolve");

    assert_eq!(settings.token(), "token");
    assert_eq!(settings.config().guild(), Some(GuildId(7)));
    assert!(!*settings.config().remove_commands());
    assert_eq!(settings.config().database_path(), "/tmp/friends.db");
    assert_eq!(settings.config().grace_period(), Duration::ZERO);
}

#[test]
fn test_missing_token_is_fatal() {
    let cli = Cli::default();
    let config = BotConfig::defaults().unwrap();

    let err = cli.merge(config.clone(), None).unwrap_err();
    assert!(err.to_string().contains("Missing bot token"));

    assert!(cli.merge(config, Some("   ".to_string())).is_err());
}

#[test]
fn test_empty_guild_registers_globally() {
    let cli = Cli::try_parse_from(["vcbuddy", "--token", "t", "--guild", ""])
        .expect("Empty guild is accepted");
    let config = BotConfig::defaults().unwrap();

    let settings = cli.merge(config, cli.token.clone()).expect("Settings resolve");

    assert_eq!(settings.config().guild(), None);
}

#[test]
fn test_non_numeric_guild_is_rejected() {
    let cli = Cli {
        guild: Some("general".to_string()),
        ..Cli::default()
    };
    let config = BotConfig::defaults().unwrap();

    let err = cli.merge(config, Some("token".to_string())).unwrap_err();
    assert!(err.to_string().contains("Invalid guild id"));
}

#[test]
fn test_bare_rmcmd_flag_enables_removal() {
    let bare = Cli::try_parse_from(["vcbuddy", "--rmcmd"]).expect("Bare flag parses");
    assert_eq!(bare.remove_commands, Some(true));

    let off = Cli::try_parse_from(["vcbuddy", "--rmcmd", "false"]).expect("Explicit value parses");
    assert_eq!(off.remove_commands, Some(false));

    let unset = Cli::try_parse_from(["vcbuddy"]).expect("No flags parse");
    assert_eq!(unset.remove_commands, None);
}
