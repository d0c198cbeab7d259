//! Domain models used by the quote endpoint.
//!
//! - `payload` — the loosely-typed object received from the quote provider.
//! - `quote` — the typed `QuoteRecord` persisted per request and its coercion policy.

pub mod payload;
pub mod quote;

pub use payload::RawQuotePayload;
pub use quote::{CoercionPolicy, QuoteRecord};
