use rust_decimal::Decimal;

use crate::models::ExchangeRate;
use crate::types::CurrencyCode;

/// Converts amounts into the base currency.
#[derive(Debug, Clone)]
pub struct AmountConverter {
    base: CurrencyCode
}

impl AmountConverter {
    pub fn new(base: CurrencyCode) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Expresses `amount` in the base currency without any rounding.
    ///
    /// The amount passes through unchanged when `currency` is the base currency or
    /// the rate is unavailable. Returns `None` only on numeric overflow.
    pub fn convert(&self, amount: Decimal, currency: &CurrencyCode, rate: ExchangeRate) -> Option<Decimal> {
        if *currency == self.base {
            return Some(amount);
        }

        match rate {
            ExchangeRate::Base | ExchangeRate::Unavailable => Some(amount),
            ExchangeRate::Quoted(rate) => amount.checked_div(rate)
        }
    }
}
