use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::pin::pin;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tokio::sync::{mpsc, OnceCell};
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info, warn};

use crate::config::{CurrencyPolicy, FailurePolicy, RateFetchPolicy, Settings};
use crate::engine::errors::{CommissionError, EngineError, LineFailure};
use crate::lookup::{BinDirectory, RateSource};
use crate::models::{ExchangeRate, RateTable, RawFields, Record};
use crate::pricing::AmountConverter;
use crate::types::{Commission, LineNumber};

/// Outcome of a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Records that produced a commission.
    pub processed: usize,
    /// Records skipped under `FailurePolicy::Skip`, in input order.
    pub failures: Vec<LineFailure>
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Turns an input file of transaction records into one commission per record.
///
/// Records are independent of each other. They may be evaluated concurrently, but
/// results are always written in input order.
pub struct CommissionEngine<D, R> {
    settings: Arc<Settings>,
    directory: Arc<D>,
    rates: Arc<R>,
    converter: AmountConverter,
    rate_table: OnceCell<Arc<RateTable>>,
    backpressure: usize
}

impl<D: BinDirectory, R: RateSource> CommissionEngine<D, R> {
    pub fn new(settings: Arc<Settings>, directory: Arc<D>, rates: Arc<R>) -> Self {
        let converter = AmountConverter::new(settings.base_currency.clone());

        Self {
            settings,
            directory,
            rates,
            converter,
            rate_table: OnceCell::new(),
            backpressure: 256
        }
    }

    /// Processes the configured input file, writing one commission per line to `output`.
    ///
    /// # Errors
    /// Returns `EngineError` if the input cannot be read, the output cannot be written,
    /// or a record fails under `FailurePolicy::Abort`. Commissions for earlier records
    /// have already been written when a record aborts the run.
    pub async fn run<W: Write>(&self, output: &mut W) -> Result<RunSummary, EngineError> {
        let path = &self.settings.input_path;
        let file = File::open(path).map_err(|source| EngineError::OpenInput {
            path: path.display().to_string(),
            source
        })?;

        let (sender, receiver) = mpsc::channel::<(LineNumber, String)>(self.backpressure);
        let reader_handle = Self::spawn_line_reader(file, sender);

        let lines = stream::unfold(receiver, |mut receiver| async move {
            receiver.recv().await.map(|line| (line, receiver))
        });

        let engine = self;
        let results = lines
            .map(move |(line_number, line)| async move {
                (line_number, engine.evaluate_line(&line).await)
            })
            .buffered(self.settings.concurrency);
        let mut results = pin!(results);

        let mut summary = RunSummary::default();

        while let Some((line_number, result)) = results.next().await {
            match result {
                Ok(commission) => {
                    debug!("Line [{line_number}] commission [{commission}]");
                    writeln!(output, "{commission}")?;
                    summary.processed += 1;
                }
                Err(error) => {
                    let failure = LineFailure { line_number, error };

                    match self.settings.failure_policy {
                        FailurePolicy::Abort => return Err(EngineError::Aborted(failure)),
                        FailurePolicy::Skip => {
                            warn!("Skipping {failure}");
                            summary.failures.push(failure);
                        }
                    }
                }
            }
        }

        match reader_handle.await {
            Ok(Ok(())) => {}
            Ok(Err(error)) => return Err(EngineError::ReadInput(error)),
            Err(error) => error!("Input reader did not finish gracefully: {error}")
        }

        info!("Processed [{}] records, [{}] failed", summary.processed, summary.failures.len());

        Ok(summary)
    }

    /// Parses and prices a single raw input line.
    pub async fn evaluate_line(&self, line: &str) -> Result<Commission, CommissionError> {
        let record = RawFields::parse(line)?.into_record()?;
        self.evaluate(&record).await
    }

    /// Prices a single record: issuer country, exchange rate, conversion, commission.
    pub async fn evaluate(&self, record: &Record) -> Result<Commission, CommissionError> {
        let is_eu = self.is_eu(&record.identifier).await?;
        let rate_table = self.rate_table().await?;

        let rate = if record.currency == *self.converter.base() {
            ExchangeRate::Base
        } else {
            rate_table.resolve(&record.currency)
        };

        if rate == ExchangeRate::Unavailable {
            if self.settings.currency_policy == CurrencyPolicy::Strict {
                return Err(CommissionError::UnsupportedCurrency { currency: record.currency.clone() });
            }

            warn!("No exchange rate for [{}], using amount [{}] unconverted", record.currency, record.amount);
        }

        let overflow = || CommissionError::ConversionOverflow {
            amount: record.amount,
            currency: record.currency.clone()
        };

        let amount = self.converter.convert(record.amount, &record.currency, rate).ok_or_else(overflow)?;

        self.settings.calculator.commission(amount, is_eu).ok_or_else(overflow)
    }

    async fn is_eu(&self, identifier: &str) -> Result<bool, CommissionError> {
        let issuer = self.directory.lookup(identifier).await
            .map_err(|source| CommissionError::IssuerLookupFailed {
                identifier: identifier.to_string(),
                source
            })?;

        let is_eu = self.settings.eu_membership.contains(&issuer.country_code);
        debug!("Identifier [{identifier}] issued in [{}], EU member: {is_eu}", issuer.country_code);

        Ok(is_eu)
    }

    async fn rate_table(&self) -> Result<Arc<RateTable>, CommissionError> {
        match self.settings.rate_fetch_policy {
            RateFetchPolicy::PerRecord => self.fetch_rate_table().await,
            //NOTE: A failed fetch leaves the cell empty so the next record tries again
            RateFetchPolicy::Once => self.rate_table
                .get_or_try_init(|| self.fetch_rate_table())
                .await
                .cloned()
        }
    }

    async fn fetch_rate_table(&self) -> Result<Arc<RateTable>, CommissionError> {
        let table = self.rates.fetch_rates().await.map_err(CommissionError::RateTableUnavailable)?;

        if table.base() != self.converter.base() {
            warn!("Rate table is quoted against [{}] but amounts are converted to [{}]", table.base(), self.converter.base());
        }

        if table.is_empty() {
            warn!("Rate table holds no rates, every non-base currency will be unavailable");
        }

        Ok(Arc::new(table))
    }

    fn spawn_line_reader(file: File, sender: mpsc::Sender<(LineNumber, String)>) -> JoinHandle<io::Result<()>> {
        spawn_blocking(move || {
            let mut reader = BufReader::new(file);
            let mut buffer = Vec::new();
            let mut line_number: LineNumber = 0;

            loop {
                buffer.clear();

                if reader.read_until(b'\n', &mut buffer)? == 0 {
                    break;
                }

                line_number += 1;

                //NOTE: Bytes that are not UTF-8 become U+FFFD, the record then stands or falls on its own values
                let decoded = String::from_utf8_lossy(&buffer);

                if let Cow::Owned(_) = decoded {
                    warn!("Line [{line_number}] is not valid UTF-8, invalid bytes were replaced");
                }

                let line = decoded.trim_end_matches(['\n', '\r']);

                if line.trim().is_empty() {
                    continue;
                }

                if sender.blocking_send((line_number, line.to_string())).is_err() {
                    break;
                }
            }

            Ok(())
        })
    }
}
