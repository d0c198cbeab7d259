//! Quote Client: asks the quote server for the current bid, prints it, and appends it
//! to a local ledger file.
//!
//! - `args` — command-line configuration.
//! - `fetcher` — the deadline-bound request to `GET /cotacao`.
//! - `ledger` — formatting and appending `Dólar: x.xx` lines.
#![warn(missing_docs)]
pub mod args;
pub mod fetcher;
pub mod ledger;

use log::info;
use quote_common::{QuoteError, Result};
use reqwest::Client;

use crate::args::Args;

/// Fetch the bid and append it to the ledger. Returns the recorded line.
///
/// Nothing is written unless the whole response arrived and decoded in time.
pub async fn run(args: &Args) -> Result<String> {
    let client = Client::builder()
        .build()
        .map_err(|e| QuoteError::Config(format!("HTTP client: {e}")))?;
    let quote = fetcher::fetch_bid(&client, &args.quote_url(), args.timeout()).await?;

    let entry = ledger::format_entry(quote.bid);
    ledger::append_entry(&args.output, &entry)?;
    info!("Appended quote to {}", args.output.display());
    Ok(entry)
}
