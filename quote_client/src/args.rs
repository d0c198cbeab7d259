//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. All arguments are optional; the
//! defaults reproduce the plain `quote_client` invocation.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT, QUOTE_PATH, SERVER_PORT, join_url};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote server.
    #[clap(long, default_value_t = format!("http://localhost:{SERVER_PORT}"))]
    pub server_url: String,

    /// File the quote line is appended to; created if missing.
    #[clap(long, default_value = "cotacao.txt")]
    pub output: PathBuf,

    /// Deadline for the whole request, in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,
}

impl Args {
    /// Full URL of the quote endpoint.
    pub fn quote_url(&self) -> String {
        join_url(&self.server_url, QUOTE_PATH)
    }

    /// Request deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_local_server() {
        let args = Args::parse_from(["quote_client"]);
        assert_eq!(args.quote_url(), "http://localhost:8080/cotacao");
        assert_eq!(args.output, PathBuf::from("cotacao.txt"));
        assert_eq!(args.timeout(), Duration::from_millis(300));
    }

    #[test]
    fn server_url_may_end_with_a_slash() {
        let args = Args::parse_from(["quote_client", "--server-url", "http://10.0.0.5:9000/"]);
        assert_eq!(args.quote_url(), "http://10.0.0.5:9000/cotacao");
    }
}
