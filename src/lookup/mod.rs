mod binlist;
mod errors;
mod exchange_rates;

use async_trait::async_trait;

use crate::models::{IssuerInfo, RateTable};

pub use binlist::BinListClient;
pub use errors::LookupError;
pub use exchange_rates::ExchangeRatesClient;

/// Resolves the issuing country of a card from its leading digits.
#[async_trait]
pub trait BinDirectory: Send + Sync + 'static {
    async fn lookup(&self, identifier: &str) -> Result<IssuerInfo, LookupError>;
}

/// Provides the current exchange rates against the service's base currency.
#[async_trait]
pub trait RateSource: Send + Sync + 'static {
    async fn fetch_rates(&self) -> Result<RateTable, LookupError>;
}
