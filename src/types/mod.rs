mod commission;
mod country;
mod currency;
mod errors;

pub use commission::Commission;
pub use country::CountryCode;
pub use currency::CurrencyCode;
pub use errors::{CountryError, CurrencyError};

/// 1-based position of a record in the input file, blank lines included.
pub type LineNumber = usize;
