use super::{Command, ConfigError, CurrencyPolicy, FailurePolicy, RateFetchPolicy, Settings};

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use tracing::level_filters::LevelFilter;

use crate::types::CurrencyCode;

fn parse(args: &[&str]) -> Result<Command, ConfigError> {
    Settings::from_args(args.iter().map(|arg| arg.to_string()))
}

fn parse_settings(args: &[&str]) -> Result<Settings> {
    match parse(args)? {
        Command::Run(settings) => Ok(settings),
        Command::Help => bail!("expected settings but got help")
    }
}

#[test]
fn test_input_path_alone_yields_defaults() -> Result<()> {
    let settings = parse_settings(&["input.txt"])?;

    assert_eq!(settings.input_path, Path::new("input.txt"));
    assert_eq!(settings.log_level, LevelFilter::ERROR);
    assert_eq!(settings.failure_policy, FailurePolicy::Abort);
    assert_eq!(settings.currency_policy, CurrencyPolicy::Lenient);
    assert_eq!(settings.rate_fetch_policy, RateFetchPolicy::Once);
    assert_eq!(settings.concurrency, 1);
    assert_eq!(settings.request_timeout, Duration::from_secs(5));
    assert_eq!(settings.base_currency, CurrencyCode::euro());

    Ok(())
}

#[test]
fn test_all_options_are_applied() -> Result<()> {
    let settings = parse_settings(&[
        "--keep-going",
        "input.txt",
        "--strict-currency",
        "--refetch-rates",
        "--log-level", "DEBUG",
        "--concurrency", "8",
        "--timeout-secs", "2",
    ])?;

    assert_eq!(settings.input_path, Path::new("input.txt"));
    assert_eq!(settings.log_level, LevelFilter::DEBUG);
    assert_eq!(settings.failure_policy, FailurePolicy::Skip);
    assert_eq!(settings.currency_policy, CurrencyPolicy::Strict);
    assert_eq!(settings.rate_fetch_policy, RateFetchPolicy::PerRecord);
    assert_eq!(settings.concurrency, 8);
    assert_eq!(settings.request_timeout, Duration::from_secs(2));

    Ok(())
}

#[test]
fn test_unknown_log_level_falls_back_to_error() -> Result<()> {
    let settings = parse_settings(&["input.txt", "--log-level", "loud"])?;

    assert_eq!(settings.log_level, LevelFilter::ERROR);

    Ok(())
}

#[test]
fn test_help_is_recognized() -> Result<()> {
    assert!(matches!(parse(&["--help"])?, Command::Help));
    assert!(matches!(parse(&["input.txt", "-h"])?, Command::Help));

    Ok(())
}

#[test]
fn test_invalid_arguments_are_rejected() {
    assert_eq!(parse(&[]).err(), Some(ConfigError::MissingInput));
    assert_eq!(parse(&["--keep-going"]).err(), Some(ConfigError::MissingInput));
    assert_eq!(parse(&["a.txt", "b.txt"]).err(), Some(ConfigError::UnexpectedArgument("b.txt".to_string())));
    assert_eq!(parse(&["a.txt", "--verbose"]).err(), Some(ConfigError::UnknownOption("--verbose".to_string())));
    assert_eq!(parse(&["a.txt", "--concurrency"]).err(), Some(ConfigError::MissingValue { option: "--concurrency".to_string() }));
    assert_eq!(
        parse(&["a.txt", "--concurrency", "0"]).err(),
        Some(ConfigError::InvalidValue { option: "--concurrency".to_string(), value: "0".to_string() })
    );
    assert_eq!(
        parse(&["a.txt", "--timeout-secs", "soon"]).err(),
        Some(ConfigError::InvalidValue { option: "--timeout-secs".to_string(), value: "soon".to_string() })
    );
}

#[test]
fn test_builder_methods_override_defaults() {
    let settings = Settings::new("input.txt")
        .with_failure_policy(FailurePolicy::Skip)
        .with_currency_policy(CurrencyPolicy::Strict)
        .with_rate_fetch_policy(RateFetchPolicy::PerRecord)
        .with_concurrency(0);

    assert_eq!(settings.failure_policy, FailurePolicy::Skip);
    assert_eq!(settings.currency_policy, CurrencyPolicy::Strict);
    assert_eq!(settings.rate_fetch_policy, RateFetchPolicy::PerRecord);
    assert_eq!(settings.concurrency, 1);
}
