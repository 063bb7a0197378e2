use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Commission;

const CENTS: Decimal = Decimal::ONE_HUNDRED;

/// Computes commission fees from base currency amounts.
#[derive(Debug, Clone)]
pub struct CommissionCalculator {
    eu_rate: Decimal,
    non_eu_rate: Decimal
}

impl CommissionCalculator {
    pub fn new(eu_rate: Decimal, non_eu_rate: Decimal) -> Self {
        Self { eu_rate, non_eu_rate }
    }

    pub fn rate(&self, is_eu: bool) -> Decimal {
        if is_eu { self.eu_rate } else { self.non_eu_rate }
    }

    /// Rounds `amount` up to the next whole cent, applies the EU or non-EU rate and
    /// rounds the fee to two decimal places.
    ///
    /// Returns `None` if the amount is too large to scale to cents.
    pub fn commission(&self, amount: Decimal, is_eu: bool) -> Option<Commission> {
        let amount_in_cents = amount.checked_mul(CENTS)?.ceil();
        let rounded_amount = amount_in_cents.checked_div(CENTS)?;
        let fee = rounded_amount.checked_mul(self.rate(is_eu))?;

        Some(Commission::new(fee))
    }
}

impl Default for CommissionCalculator {
    fn default() -> Self {
        Self::new(dec!(0.01), dec!(0.02))
    }
}
