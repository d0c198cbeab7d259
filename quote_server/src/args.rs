//! Command-line arguments for the quote server.
//!
//! Every option has a default, so the server starts with no arguments at all.
use std::time::Duration;

use clap::Parser;
use quote_common::CurrencyPair;
use quote_common::net::{FETCH_TIMEOUT, PROVIDER_BASE_URL, SERVER_PORT, STORE_TIMEOUT, addr};

use crate::endpoint::EndpointSettings;
use crate::model::CoercionPolicy;
use crate::store::MEMORY_DATABASE;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interface to bind.
    #[clap(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[clap(long, default_value_t = SERVER_PORT)]
    pub port: u16,

    /// Base URL of the quote provider; the pair is appended as the last path segment.
    #[clap(long, default_value = PROVIDER_BASE_URL)]
    pub provider_url: String,

    /// Currency pair to quote, as BASE-QUOTE.
    #[clap(long, default_value = "USD-BRL")]
    pub pair: CurrencyPair,

    /// Deadline for the provider call, in milliseconds.
    #[clap(long, default_value_t = FETCH_TIMEOUT.as_millis() as u64)]
    pub fetch_timeout_ms: u64,

    /// Deadline for each store operation, in milliseconds.
    #[clap(long, default_value_t = STORE_TIMEOUT.as_millis() as u64)]
    pub store_timeout_ms: u64,

    /// SQLite database file, or `:memory:` for a database that lives as long as the process.
    #[clap(long, default_value = MEMORY_DATABASE)]
    pub database: String,

    /// Handling of payload fields that cannot be coerced to their column type.
    #[clap(long, value_enum, default_value_t = CoercionPolicy::Strict)]
    pub coercion: CoercionPolicy,

    /// Read back and log every stored quote after each insert.
    #[clap(long)]
    pub confirm_insert: bool,
}

impl Args {
    /// Address the listener binds to.
    pub fn bind_addr(&self) -> String {
        addr(&self.host, self.port)
    }

    /// Provider deadline.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Endpoint settings derived from the flags.
    pub fn endpoint_settings(&self) -> EndpointSettings {
        EndpointSettings {
            store_timeout: Duration::from_millis(self.store_timeout_ms),
            coercion: self.coercion,
            confirm_insert: self.confirm_insert,
        }
    }
}
