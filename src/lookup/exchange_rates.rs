use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::lookup::{LookupError, RateSource};
use crate::models::RateTable;
use crate::types::CurrencyCode;

const EXCHANGE_RATES_URL: &str = "https://api.exchangeratesapi.io/latest";

#[derive(Debug, Deserialize)]
struct RatesResponse {
    base: Option<String>,
    rates: Option<HashMap<String, Decimal>>
}

/// `RateSource` backed by the exchangeratesapi.io HTTP service.
pub struct ExchangeRatesClient {
    client: Client,
    url: String,
    default_base: CurrencyCode
}

impl ExchangeRatesClient {
    /// `default_base` is used when the service omits the `base` field.
    pub fn new(client: Client, default_base: CurrencyCode) -> Self {
        Self::with_url(client, EXCHANGE_RATES_URL, default_base)
    }

    pub fn with_url(client: Client, url: impl Into<String>, default_base: CurrencyCode) -> Self {
        Self {
            client,
            url: url.into(),
            default_base
        }
    }
}

#[async_trait]
impl RateSource for ExchangeRatesClient {
    async fn fetch_rates(&self) -> Result<RateTable, LookupError> {
        debug!("Fetching exchange rates from [{}]", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let table = parse_rate_table(&response.text().await?, &self.default_base)?;
        debug!("Fetched [{}] exchange rates against [{}]", table.len(), table.base());

        Ok(table)
    }
}

/// Builds a `RateTable` from a rate service response body.
///
/// Entries whose key is not a three letter code are skipped.
pub(crate) fn parse_rate_table(body: &str, default_base: &CurrencyCode) -> Result<RateTable, LookupError> {
    let response: RatesResponse = serde_json::from_str(body)?;
    let rates = response.rates.ok_or(LookupError::MissingField("rates"))?;

    let base = match response.base {
        Some(base) => CurrencyCode::from_str(&base)?,
        None => default_base.clone()
    };

    let mut entries = Vec::with_capacity(rates.len());

    for (code, rate) in rates {
        match CurrencyCode::from_str(&code) {
            Ok(currency) => entries.push((currency, rate)),
            Err(error) => warn!("Skipping exchange rate entry: {error}")
        }
    }

    Ok(RateTable::new(base, entries))
}
