use crate::types::errors::CountryError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CODE_LENGTH: usize = 2;

/// Two letter country code as reported by the BIN directory, upper-cased.
///
/// Only the shape is checked. Codes that are not assigned by ISO 3166 are still
/// accepted because the EU list itself carries one (`PO`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CountryCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = CountryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.len() != CODE_LENGTH || !value.bytes().all(|byte| byte.is_ascii_alphabetic()) {
            return Err(CountryError::InvalidFormat(value.to_string()));
        }

        Ok(CountryCode(value.to_ascii_uppercase()))
    }
}
