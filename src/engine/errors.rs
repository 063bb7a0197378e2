use std::io;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::lookup::LookupError;
use crate::models::RecordError;
use crate::types::{CurrencyCode, LineNumber};

/// Why a single record could not produce a commission.
#[derive(Debug, Error)]
pub enum CommissionError {
    #[error(transparent)]
    MalformedRecord(#[from] RecordError),
    #[error("Issuer lookup failed for identifier [{identifier}]: {source}")]
    IssuerLookupFailed {
        identifier: String,
        #[source]
        source: LookupError
    },
    #[error("Rate table unavailable: {0}")]
    RateTableUnavailable(#[source] LookupError),
    #[error("Currency [{currency}] is not present in the rate table")]
    UnsupportedCurrency {
        currency: CurrencyCode
    },
    #[error("Numeric overflow while pricing amount [{amount}] [{currency}]")]
    ConversionOverflow {
        amount: Decimal,
        currency: CurrencyCode
    }
}

/// A failed record and where it was in the input.
#[derive(Debug, Error)]
#[error("line {line_number}: {error}")]
pub struct LineFailure {
    pub line_number: LineNumber,
    #[source]
    pub error: CommissionError
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unable to open input file [{path}]: {source}")]
    OpenInput {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Unable to read input file: {0}")]
    ReadInput(#[source] io::Error),
    #[error("Unable to write output: {0}")]
    WriteOutput(#[from] io::Error),
    #[error("Processing aborted at {0}")]
    Aborted(#[from] LineFailure)
}
