//! Typed quote record persisted once per request.
//!
//! A `QuoteRecord` is the flat, typed form of a [`RawQuotePayload`]. How extraction
//! failures are handled is decided by [`CoercionPolicy`]: either the whole request
//! fails, or the broken fields degrade to zero-values and the row is stored anyway.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use log::warn;
use quote_common::{QuoteResponse, Result};

use crate::model::payload::RawQuotePayload;

/// What to do when a payload field is missing or cannot be coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CoercionPolicy {
    /// Fail the request with `QuoteError::FieldCoercion`; nothing is persisted.
    #[default]
    Strict,
    /// Log a warning and store the zero-value (`""`, `0.0`, `0`) for that field.
    ZeroFill,
}

impl CoercionPolicy {
    fn apply<T: Default>(self, result: Result<T>) -> Result<T> {
        match (self, result) {
            (_, Ok(value)) => Ok(value),
            (CoercionPolicy::ZeroFill, Err(e)) => {
                warn!("{}; storing zero-value", e);
                Ok(T::default())
            }
            (CoercionPolicy::Strict, Err(e)) => Err(e),
        }
    }
}

/// One row of the `cotacoes` table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct QuoteRecord {
    /// Base currency code, e.g. `USD`.
    pub code: String,
    /// Quote currency code, e.g. `BRL`.
    pub codein: String,
    /// Human-readable pair name.
    pub name: String,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Absolute bid variation.
    #[sqlx(rename = "varBid")]
    pub var_bid: f64,
    /// Percentage change.
    #[sqlx(rename = "pctChange")]
    pub pct_change: f64,
    /// Purchase price.
    pub bid: f64,
    /// Sale price.
    pub ask: f64,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Creation date exactly as the provider formatted it.
    pub create_date: String,
}

impl QuoteRecord {
    /// Build a record from the provider payload under `policy`.
    pub fn from_payload(payload: &RawQuotePayload, policy: CoercionPolicy) -> Result<Self> {
        Ok(Self {
            code: policy.apply(payload.text("code"))?,
            codein: policy.apply(payload.text("codein"))?,
            name: policy.apply(payload.text("name"))?,
            high: policy.apply(payload.float("high"))?,
            low: policy.apply(payload.float("low"))?,
            var_bid: policy.apply(payload.float("varBid"))?,
            pct_change: policy.apply(payload.float("pctChange"))?,
            bid: policy.apply(payload.float("bid"))?,
            ask: policy.apply(payload.float("ask"))?,
            timestamp: policy.apply(payload.integer("timestamp"))?,
            create_date: policy.apply(payload.text("create_date"))?,
        })
    }

    /// Quote time as UTC, if `timestamp` is in range.
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Single-field projection sent back to the client.
    pub fn to_response(&self) -> QuoteResponse {
        QuoteResponse::new(self.bid)
    }
}
