//! Raw provider payload.
//!
//! The provider answers with `{"USDBRL": {"bid": "5.12", "timestamp": "1700000000", ...}}`.
//! Prices and timestamps arrive as strings, so typed accessors below coerce them and
//! report a `QuoteError::FieldCoercion` naming the offending field.
use quote_common::{CurrencyPair, QuoteError, Result};
use serde_json::{Map, Value};

/// The object nested under the currency-pair key of a provider response.
#[derive(Debug, Clone)]
pub struct RawQuotePayload {
    pair: CurrencyPair,
    fields: Map<String, Value>,
}

impl RawQuotePayload {
    /// Decode a provider response body and extract the object for `pair`.
    pub fn from_json_bytes(body: &[u8], pair: &CurrencyPair) -> Result<Self> {
        let root: Value = serde_json::from_slice(body)?;
        let key = pair.payload_key();
        let Value::Object(mut root) = root else {
            return Err(QuoteError::Decode("provider body is not a JSON object".into()));
        };
        match root.remove(&key) {
            Some(Value::Object(fields)) => Ok(Self { pair: *pair, fields }),
            Some(_) => Err(QuoteError::Decode(format!("`{key}` is not a JSON object"))),
            None => Err(QuoteError::Decode(format!("`{key}` missing from provider body"))),
        }
    }

    /// Pair this payload was extracted for.
    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    /// String field. Numbers are not accepted as text.
    pub fn text(&self, field: &str) -> Result<String> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(field, "a string", other)),
        }
    }

    /// Float field given either as a numeric string or a JSON number.
    /// `NaN` and infinities are refused even though `f64` parses them.
    pub fn float(&self, field: &str) -> Result<f64> {
        let value = self.require(field)?;
        let parsed = match value {
            Value::String(s) => s.trim().parse::<f64>().map_err(|e| QuoteError::FieldCoercion {
                field: field.to_string(),
                reason: format!("`{s}` is not a float: {e}"),
            })?,
            Value::Number(n) => n.as_f64().ok_or_else(|| mismatch(field, "a float", value))?,
            other => return Err(mismatch(field, "a float", other)),
        };
        if !parsed.is_finite() {
            return Err(QuoteError::FieldCoercion {
                field: field.to_string(),
                reason: "not finite".to_string(),
            });
        }
        Ok(parsed)
    }

    /// Integer field given either as a numeric string or a JSON integer.
    pub fn integer(&self, field: &str) -> Result<i64> {
        let value = self.require(field)?;
        match value {
            Value::String(s) => s.trim().parse::<i64>().map_err(|e| QuoteError::FieldCoercion {
                field: field.to_string(),
                reason: format!("`{s}` is not an integer: {e}"),
            }),
            Value::Number(n) => n.as_i64().ok_or_else(|| mismatch(field, "an integer", value)),
            other => Err(mismatch(field, "an integer", other)),
        }
    }

    /// The bid, always parsed strictly; this is what the endpoint returns.
    pub fn bid(&self) -> Result<f64> {
        self.float("bid")
    }

    fn require(&self, field: &str) -> Result<&Value> {
        self.fields.get(field).ok_or_else(|| QuoteError::FieldCoercion {
            field: field.to_string(),
            reason: "missing".to_string(),
        })
    }
}

fn mismatch(field: &str, expected: &str, found: &Value) -> QuoteError {
    QuoteError::FieldCoercion {
        field: field.to_string(),
        reason: format!("expected {expected}, found `{found}`"),
    }
}
