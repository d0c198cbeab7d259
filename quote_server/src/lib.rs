//! Quote server: fetches a currency quote from an upstream HTTP API, persists it to
//! SQLite, and serves the bid as `{"bid": ...}` on `GET /cotacao`.
//!
//! Building blocks:
//! - `provider` — `QuoteProvider`, the deadline-bound call to the upstream API.
//! - `model` — the raw provider payload and the typed `QuoteRecord`.
//! - `store` — `QuoteStore`, the append-only `cotacoes` table.
//! - `endpoint` — the axum router and the per-request orchestration.
//! - `args` — command-line configuration.
#![warn(missing_docs)]
pub mod args;
pub mod endpoint;
pub mod model;
pub mod provider;
pub mod store;

pub use endpoint::{AppState, EndpointSettings, router};
pub use provider::QuoteProvider;
pub use store::QuoteStore;
