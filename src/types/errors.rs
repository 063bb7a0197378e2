use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("Currency error: '{0}' is not a three letter code")]
    InvalidFormat(String)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountryError {
    #[error("Country error: '{0}' is not a two letter code")]
    InvalidFormat(String)
}
