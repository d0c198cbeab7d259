//! Requesting the current bid from the quote server.
//!
//! One GET, no retry. The deadline covers connecting, sending, and reading the whole
//! body, so a server that stalls mid-response still fails in time.
use std::time::Duration;

use log::{debug, info};
use quote_common::{QuoteError, QuoteResponse, Result, with_deadline};
use reqwest::Client;

/// Fetch and decode `{"bid": ...}` from `url`, giving up after `timeout`.
pub async fn fetch_bid(client: &Client, url: &str, timeout: Duration) -> Result<QuoteResponse> {
    info!("Requesting quote from {}", url);
    with_deadline(timeout, "quote request", async {
        let response = client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::UnexpectedStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());
        QuoteResponse::from_json_bytes(&body)
    })
    .await
}
