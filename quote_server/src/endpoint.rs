//! HTTP quote endpoint.
//!
//! `GET /cotacao` runs the whole flow synchronously for each request: fetch the quote
//! from the provider, type it, persist it, and answer `{"bid": ...}`. Failures at any
//! stage are logged with that stage's name and turned into an opaque 500; no error
//! detail is sent to the client.
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use log::{error, info};
use quote_common::net::QUOTE_PATH;
use quote_common::{QuoteError, QuoteResponse};
use thiserror::Error;

use crate::model::{CoercionPolicy, QuoteRecord};
use crate::provider::QuoteProvider;
use crate::store::QuoteStore;

/// Body of every 500 response.
pub const INTERNAL_ERROR_BODY: &str = "internal server error";

/// Per-request knobs of the endpoint.
#[derive(Debug, Clone, Copy)]
pub struct EndpointSettings {
    /// Deadline shared by the insert and, when enabled, the read-back.
    pub store_timeout: Duration,
    /// How payload fields that fail to coerce are handled.
    pub coercion: CoercionPolicy,
    /// Read back and log all stored rows after each insert.
    pub confirm_insert: bool,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            store_timeout: quote_common::net::STORE_TIMEOUT,
            coercion: CoercionPolicy::default(),
            confirm_insert: false,
        }
    }
}

/// Dependencies of the endpoint, built once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    /// Upstream quote source.
    pub provider: Arc<QuoteProvider>,
    /// Quote database.
    pub store: Arc<QuoteStore>,
    /// Request-handling settings.
    pub settings: EndpointSettings,
}

/// A failed stage of the quote flow. Rendered as a bare 500.
#[derive(Debug, Error)]
#[error("{stage}: {source}")]
pub struct InternalError {
    stage: &'static str,
    source: QuoteError,
}

impl InternalError {
    /// Adapter for `map_err` that tags an error with the stage it came from.
    fn at(stage: &'static str) -> impl FnOnce(QuoteError) -> Self {
        move |source| Self { stage, source }
    }

    /// Underlying error.
    pub fn source_error(&self) -> &QuoteError {
        &self.source
    }
}

impl IntoResponse for InternalError {
    fn into_response(self) -> Response {
        error!("Quote request failed while {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
    }
}

/// Router exposing `GET /cotacao`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(quote_handler))
        .with_state(state)
}

async fn quote_handler(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, InternalError> {
    serve_quote(&state).await.map(Json)
}

/// Fetch, persist, and reduce one quote.
pub async fn serve_quote(state: &AppState) -> Result<QuoteResponse, InternalError> {
    let settings = state.settings;

    let payload = state
        .provider
        .fetch()
        .await
        .map_err(InternalError::at("fetching quote"))?;

    let record = QuoteRecord::from_payload(&payload, settings.coercion)
        .map_err(InternalError::at("reading quote fields"))?;

    let store_started = Instant::now();
    state
        .store
        .persist(&record, settings.store_timeout)
        .await
        .map_err(InternalError::at("persisting quote"))?;

    if settings.confirm_insert {
        log_stored_quotes(&state.store, remaining(settings.store_timeout, store_started))
            .await
            .map_err(InternalError::at("reading back stored quotes"))?;
    }

    // Under zero-fill the stored bid may be a placeholder; the client only gets a real one.
    let bid = payload.bid().map_err(InternalError::at("reading bid"))?;

    match record.quoted_at() {
        Some(at) => info!("{} bid {} (quoted at {})", payload.pair(), bid, at.to_rfc3339()),
        None => info!("{} bid {}", payload.pair(), bid),
    }
    Ok(QuoteResponse::new(bid))
}

/// What is left of `budget` once the time since `started` is spent.
fn remaining(budget: Duration, started: Instant) -> Duration {
    budget.saturating_sub(started.elapsed())
}

async fn log_stored_quotes(store: &QuoteStore, timeout: Duration) -> quote_common::Result<()> {
    let rows = store.fetch_all(timeout).await?;
    info!("{} quotes stored", rows.len());
    for row in rows {
        info!(
            "code: {}, codein: {}, name: {}, high: {}, low: {}, varBid: {}, pctChange: {}, bid: {}, ask: {}, timestamp: {}, create_date: {}",
            row.code,
            row.codein,
            row.name,
            row.high,
            row.low,
            row.var_bid,
            row.pct_change,
            row.bid,
            row.ask,
            row.timestamp,
            row.create_date
        );
    }
    Ok(())
}
