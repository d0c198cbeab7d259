//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `currency` — currency codes and the requested `CurrencyPair`.
//! - `quote` — the `{"bid": ...}` payload exchanged over HTTP.
//! - `deadline` — timeout wrapper for network and store calls.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod currency;
pub mod deadline;
pub mod error;
pub mod net;
pub mod quote;
pub mod result;

pub use currency::{Currency, CurrencyPair};
pub use deadline::with_deadline;
pub use error::QuoteError;
pub use quote::QuoteResponse;
pub use result::Result;
