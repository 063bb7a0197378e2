use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::errors::RecordError;
use crate::types::CurrencyCode;

/// The three values of one input line, in positional order, quotes stripped.
///
/// Key names are not interpreted: `"a":1,"b":2,"c":3` and `"bin":1,"amount":2,"currency":3`
/// produce the same fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub identifier: String,
    pub amount: String,
    pub currency: String
}

impl RawFields {
    /// Splits a raw line into its three values.
    ///
    /// Surrounding whitespace is ignored, as is a single pair of enclosing braces.
    ///
    /// # Errors
    /// Returns `RecordError` if the line does not hold exactly three comma separated
    /// segments or a segment does not hold exactly one `:`.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let mut line = line.trim();

        if let Some(inner) = line.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')) {
            line = inner.trim();
        }

        let segments: Vec<&str> = line.split(',').collect();

        let [identifier, amount, currency] = segments.as_slice() else {
            return Err(RecordError::FieldCount { found: segments.len() });
        };

        let identifier = extract_value(1, identifier)?;
        let amount = extract_value(2, amount)?;
        let currency = extract_value(3, currency)?;

        Ok(Self { identifier, amount, currency })
    }

    /// Types the raw values into a `Record`.
    pub fn into_record(self) -> Result<Record, RecordError> {
        if self.identifier.is_empty() || !self.identifier.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(RecordError::InvalidIdentifier { value: self.identifier });
        }

        let amount = Decimal::from_str(&self.amount)
            .or_else(|_| Decimal::from_scientific(&self.amount))
            .map_err(|_| RecordError::InvalidAmount { value: self.amount.clone() })?;

        let currency = CurrencyCode::from_str(&self.currency)?;

        Ok(Record {
            identifier: self.identifier,
            amount,
            currency
        })
    }
}

impl Display for RawFields {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "\"bin\":\"{}\",\"amount\":{},\"currency\":\"{}\"", self.identifier, self.amount, self.currency)
    }
}

fn extract_value(position: usize, segment: &str) -> Result<String, RecordError> {
    let segment = segment.trim();

    match segment.split_once(':') {
        Some((_, value)) if !value.contains(':') => Ok(value.trim().trim_matches('"').to_string()),
        _ => Err(RecordError::KeyValueSeparator { position, segment: segment.to_string() })
    }
}

/// A single typed transaction from the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Card number or BIN prefix, digits only.
    pub identifier: String,
    /// Amount in `currency`, kept exactly as written in the input.
    pub amount: Decimal,
    pub currency: CurrencyCode
}

impl FromStr for Record {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        RawFields::parse(line)?.into_record()
    }
}
