use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::types::CurrencyCode;

/// How an amount in a given currency relates to the table's base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeRate {
    /// The currency is the base currency, no conversion applies.
    Base,
    /// Units of the currency per one unit of the base currency.
    Quoted(Decimal),
    /// The table has no usable rate for the currency.
    Unavailable
}

/// Exchange rates against a single base currency, fetched from the rate service.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: CurrencyCode,
    rates: HashMap<CurrencyCode, Decimal>
}

impl RateTable {
    pub fn new(base: CurrencyCode, rates: impl IntoIterator<Item = (CurrencyCode, Decimal)>) -> Self {
        Self {
            base,
            rates: rates.into_iter().collect()
        }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Resolves the rate for `currency`.
    ///
    /// A missing currency, or a quoted rate that is zero or negative, resolves to
    /// `ExchangeRate::Unavailable` rather than an error.
    pub fn resolve(&self, currency: &CurrencyCode) -> ExchangeRate {
        if *currency == self.base {
            return ExchangeRate::Base;
        }

        match self.rates.get(currency) {
            Some(rate) if rate.is_sign_positive() && !rate.is_zero() => ExchangeRate::Quoted(*rate),
            _ => ExchangeRate::Unavailable
        }
    }
}
