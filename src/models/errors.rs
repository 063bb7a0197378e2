use crate::types::CurrencyError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Malformed record: expected 3 comma separated fields but found {found}")]
    FieldCount {
        found: usize
    },
    #[error("Malformed record: field {position} [{segment}] must contain exactly one ':'")]
    KeyValueSeparator {
        position: usize,
        segment: String
    },
    #[error("Malformed record: identifier [{value}] must be a non-empty run of digits")]
    InvalidIdentifier {
        value: String
    },
    #[error("Malformed record: amount [{value}] is not a decimal number")]
    InvalidAmount {
        value: String
    },
    #[error("Malformed record: {0}")]
    InvalidCurrency(#[from] CurrencyError)
}
