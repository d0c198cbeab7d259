//! Quote provider adapter.
//!
//! Issues one GET to the upstream quote API per request, bounded by a deadline that
//! covers connecting, sending, and reading the full body. There is no retry.
use std::time::Duration;

use log::debug;
use quote_common::net::join_url;
use quote_common::{CurrencyPair, QuoteError, Result, with_deadline};
use reqwest::Client;

use crate::model::RawQuotePayload;

/// HTTP client bound to one provider URL and currency pair.
pub struct QuoteProvider {
    client: Client,
    url: String,
    pair: CurrencyPair,
    timeout: Duration,
}

impl QuoteProvider {
    /// Create a provider for `base_url`, e.g. `https://economia.awesomeapi.com.br/json/last`.
    /// The pair is appended as the last path segment.
    pub fn new(base_url: &str, pair: CurrencyPair, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| QuoteError::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: join_url(base_url, &pair.to_string()),
            pair,
            timeout,
        })
    }

    /// Full URL queried on every fetch.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current quote for the configured pair.
    pub async fn fetch(&self) -> Result<RawQuotePayload> {
        fetch_quote(&self.client, &self.url, &self.pair, self.timeout).await
    }
}

/// Single-attempt GET of `url`, decoded into the payload nested under `pair`.
///
/// Fails with `Timeout` when `timeout` elapses first, `Network` or `UnexpectedStatus`
/// for transport problems, and `Decode` when the body does not have the expected shape.
pub async fn fetch_quote(
    client: &Client,
    url: &str,
    pair: &CurrencyPair,
    timeout: Duration,
) -> Result<RawQuotePayload> {
    let body = with_deadline(timeout, "provider fetch", async {
        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::UnexpectedStatus(status.as_u16()));
        }
        Ok(response.bytes().await?)
    })
    .await?;
    debug!("Provider answered {} bytes from {}", body.len(), url);
    RawQuotePayload::from_json_bytes(&body, pair)
}
