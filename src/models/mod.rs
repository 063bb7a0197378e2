mod errors;
mod issuer;
mod rate_table;
mod record;

pub use errors::RecordError;
pub use issuer::IssuerInfo;
pub use rate_table::{ExchangeRate, RateTable};
pub use record::{RawFields, Record};
