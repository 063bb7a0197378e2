use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::lookup::{BinDirectory, LookupError};
use crate::models::IssuerInfo;
use crate::types::CountryCode;

const BIN_LOOKUP_URL: &str = "https://lookup.binlist.net/";

#[derive(Debug, Deserialize)]
struct BinResponse {
    country: Option<BinCountry>
}

#[derive(Debug, Deserialize)]
struct BinCountry {
    alpha2: Option<String>
}

/// `BinDirectory` backed by the binlist.net HTTP service.
pub struct BinListClient {
    client: Client,
    base_url: String
}

impl BinListClient {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BIN_LOOKUP_URL)
    }

    /// Points the client at another directory, the identifier is appended as the last path segment.
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into()
        }
    }
}

#[async_trait]
impl BinDirectory for BinListClient {
    async fn lookup(&self, identifier: &str) -> Result<IssuerInfo, LookupError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), identifier);
        debug!("Looking up issuer for identifier [{identifier}]");

        let response = self.client.get(&url)
            .header("Accept-Version", "3")
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        parse_issuer(&response.text().await?)
    }
}

/// Extracts `country.alpha2` from a BIN directory response body.
pub(crate) fn parse_issuer(body: &str) -> Result<IssuerInfo, LookupError> {
    let response: BinResponse = serde_json::from_str(body)?;

    let alpha2 = response.country
        .and_then(|country| country.alpha2)
        .ok_or(LookupError::MissingField("country.alpha2"))?;

    Ok(IssuerInfo {
        country_code: CountryCode::from_str(&alpha2)?
    })
}
