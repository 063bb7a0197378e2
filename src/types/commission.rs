use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};

const DECIMAL_PLACES: u32 = 2;

/// A commission fee, held at exactly two decimal places.
///
/// Rounding uses half away from zero, so `0.505` becomes `0.51`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Commission(Decimal);

impl Commission {
    pub fn new(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DECIMAL_PLACES);
        Commission(rounded)
    }
}

impl Display for Commission {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
