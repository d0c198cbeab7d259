//! Quote HTTP server.
//!
//! Wires the SQLite store and the provider client into the endpoint state, binds the
//! listener, and serves until Ctrl+C. Any startup failure (store, provider client,
//! bind) is logged and the process exits with a non-zero status.
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use quote_common::{QuoteError, Result};
use quote_server::args::Args;
use quote_server::{AppState, QuoteProvider, QuoteStore, router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let result = run(args).await;
    if let Err(e) = &result {
        error!("Quote server stopped: {}", e);
    }
    result
}

async fn run(args: Args) -> Result<()> {
    let store = Arc::new(QuoteStore::connect(&args.database).await?);
    let provider = Arc::new(QuoteProvider::new(
        &args.provider_url,
        args.pair,
        args.fetch_timeout(),
    )?);
    info!(
        "Quoting {} from {} (fetch deadline {:?})",
        args.pair,
        provider.url(),
        args.fetch_timeout()
    );

    let state = AppState {
        provider,
        store: store.clone(),
        settings: args.endpoint_settings(),
    };

    let listener = TcpListener::bind(args.bind_addr()).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
