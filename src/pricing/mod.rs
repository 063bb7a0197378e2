mod calculator;
mod converter;
mod eu;
#[cfg(test)]
mod tests;

pub use calculator::CommissionCalculator;
pub use converter::AmountConverter;
pub use eu::EuMembership;
