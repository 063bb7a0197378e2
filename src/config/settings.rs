use std::path::PathBuf;
use std::time::Duration;

use tracing::level_filters::LevelFilter;

use crate::config::errors::ConfigError;
use crate::pricing::{CommissionCalculator, EuMembership};
use crate::types::CurrencyCode;

pub const USAGE: &str = "Usage: commission-calculator <input_file> [--log-level <level>] [--keep-going] \
[--strict-currency] [--refetch-rates] [--concurrency <n>] [--timeout-secs <n>]";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// What happens to the run when one line cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing line.
    Abort,
    /// Log the failure, keep going and report every failure at the end.
    Skip
}

/// How a currency missing from the rate table is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPolicy {
    /// Use the amount unconverted.
    Lenient,
    /// Fail the line.
    Strict
}

/// How often the rate table is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateFetchPolicy {
    /// Once per run, on the first record that needs it.
    Once,
    /// Once for every record.
    PerRecord
}

/// The outcome of reading the command line.
#[derive(Debug)]
pub enum Command {
    Run(Settings),
    Help
}

/// Process wide configuration, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_path: PathBuf,
    pub log_level: LevelFilter,
    pub failure_policy: FailurePolicy,
    pub currency_policy: CurrencyPolicy,
    pub rate_fetch_policy: RateFetchPolicy,
    /// Number of records evaluated at the same time. Output order never changes.
    pub concurrency: usize,
    pub request_timeout: Duration,
    pub base_currency: CurrencyCode,
    pub eu_membership: EuMembership,
    pub calculator: CommissionCalculator
}

impl Settings {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            log_level: LevelFilter::ERROR,
            failure_policy: FailurePolicy::Abort,
            currency_policy: CurrencyPolicy::Lenient,
            rate_fetch_policy: RateFetchPolicy::Once,
            concurrency: 1,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_currency: CurrencyCode::euro(),
            eu_membership: EuMembership::default(),
            calculator: CommissionCalculator::default()
        }
    }

    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    pub fn with_currency_policy(mut self, currency_policy: CurrencyPolicy) -> Self {
        self.currency_policy = currency_policy;
        self
    }

    pub fn with_rate_fetch_policy(mut self, rate_fetch_policy: RateFetchPolicy) -> Self {
        self.rate_fetch_policy = rate_fetch_policy;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Reads the command line, without the program name.
    ///
    /// # Errors
    /// Returns `ConfigError` for a missing input path, an unknown option, a second
    /// positional argument, or an option with a missing or invalid value.
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut input_path = None;
        let mut settings = Settings::new(PathBuf::new());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--keep-going" => settings = settings.with_failure_policy(FailurePolicy::Skip),
                "--strict-currency" => settings = settings.with_currency_policy(CurrencyPolicy::Strict),
                "--refetch-rates" => settings = settings.with_rate_fetch_policy(RateFetchPolicy::PerRecord),
                "--log-level" => {
                    let value = next_value(&arg, &mut args)?;
                    settings.log_level = parse_log_level(&value);
                }
                "--concurrency" => {
                    let value = next_value(&arg, &mut args)?;
                    settings = settings.with_concurrency(parse_positive(&arg, &value)? as usize);
                }
                "--timeout-secs" => {
                    let value = next_value(&arg, &mut args)?;
                    settings.request_timeout = Duration::from_secs(parse_positive(&arg, &value)?);
                }
                option if option.starts_with("--") => return Err(ConfigError::UnknownOption(arg)),
                _ if input_path.is_none() => input_path = Some(PathBuf::from(arg)),
                _ => return Err(ConfigError::UnexpectedArgument(arg))
            }
        }

        settings.input_path = input_path.ok_or(ConfigError::MissingInput)?;

        Ok(Command::Run(settings))
    }
}

fn next_value(option: &str, args: &mut impl Iterator<Item = String>) -> Result<String, ConfigError> {
    args.next().ok_or_else(|| ConfigError::MissingValue { option: option.to_string() })
}

fn parse_positive(option: &str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidValue { option: option.to_string(), value: value.to_string() })
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
