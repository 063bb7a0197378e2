use crate::types::errors::CurrencyError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CODE_LENGTH: usize = 3;

/// An ISO 4217 style currency code, always stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The reference currency every rate is quoted against.
    pub fn euro() -> Self {
        CurrencyCode("EUR".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.len() != CODE_LENGTH || !value.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidFormat(value.to_string()));
        }

        Ok(CurrencyCode(value.to_ascii_uppercase()))
    }
}
