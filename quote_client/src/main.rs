//! Quote Client — fetches the current bid from the quote server, appends
//! `Dólar: x.xx` to a local file, and prints the same line.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080 --output cotacao.txt --timeout-ms 300
//! ```
//!
//! Any failure (timeout, transport, bad status, undecodable body, file I/O) is fatal:
//! it is logged and the process exits with status 1 without writing anything.
use clap::Parser;
use log::error;
use quote_client::args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logger();
    let args = Args::parse();

    match quote_client::run(&args).await {
        Ok(entry) => println!("{entry}"),
        Err(e) => {
            error!("Failed to record quote: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
