use crate::types::{CountryError, CurrencyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Lookup error: request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Lookup error: service responded with status {0}")]
    Status(u16),
    #[error("Lookup error: response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Lookup error: response is missing the [{0}] field")]
    MissingField(&'static str),
    #[error("Lookup error: {0}")]
    InvalidCountry(#[from] CountryError),
    #[error("Lookup error: {0}")]
    InvalidCurrency(#[from] CurrencyError)
}
