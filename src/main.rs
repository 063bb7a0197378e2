mod config;
mod engine;
mod lookup;
mod models;
mod pricing;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::{Command, Settings, USAGE};
use crate::engine::{CommissionEngine, EngineError};
use crate::lookup::{BinListClient, ExchangeRatesClient};

const EXIT_INVALID_ARGUMENT: i32 = 1;
const EXIT_RECORD_FAILURE: i32 = 2;

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: The option set is small enough that hand parsing stays readable, clap would be the next step
    let settings = match Settings::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(settings)) => settings,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            exit(EXIT_INVALID_ARGUMENT);
        }
    };

    setup_logging(settings.log_level);

    let client = reqwest::Client::builder()
        .timeout(settings.request_timeout)
        .build()?;

    let directory = Arc::new(BinListClient::new(client.clone()));
    let rates = Arc::new(ExchangeRatesClient::new(client, settings.base_currency.clone()));
    let engine = CommissionEngine::new(Arc::new(settings), directory, rates);

    let mut output = BufWriter::new(stdout().lock());

    let timer = Instant::now();
    let result = engine.run(&mut output).await;
    let duration = timer.elapsed();

    //NOTE: Commissions written before a failure still need to reach stdout
    output.flush()?;
    drop(output);

    info!("Processed input in: {duration:?}");

    match result {
        Ok(summary) if summary.is_clean() => Ok(()),
        Ok(summary) => {
            for failure in &summary.failures {
                eprintln!("{failure}");
            }

            eprintln!("{} of {} records failed", summary.failures.len(), summary.failures.len() + summary.processed);
            exit(EXIT_RECORD_FAILURE);
        }
        Err(error @ EngineError::Aborted(_)) => {
            eprintln!("{error}");
            exit(EXIT_RECORD_FAILURE);
        }
        Err(error @ (EngineError::OpenInput { .. } | EngineError::ReadInput(_))) => {
            eprintln!("{error}");
            exit(EXIT_INVALID_ARGUMENT);
        }
        Err(error) => Err(error.into())
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries only commission values, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
