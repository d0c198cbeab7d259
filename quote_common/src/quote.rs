//! The `{"bid": ...}` payload exchanged between server and client.
//!
//! The server always writes `bid` as a JSON number. The client is lenient and also
//! accepts a numeric string, which is how upstream quote APIs tend to ship prices.
use serde::{Deserialize, Deserializer, Serialize};

/// Reduced quote returned by `GET /cotacao`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Quoted purchase price.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub bid: f64,
}

impl QuoteResponse {
    /// Wraps a bid.
    pub fn new(bid: f64) -> Self {
        Self { bid }
    }

    /// Encode the response to JSON bytes.
    pub fn to_json_bytes(&self) -> crate::Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a response body.
    pub fn from_json_bytes(body: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let bid = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom)?,
    };
    if !bid.is_finite() {
        return Err(serde::de::Error::custom(format!("bid `{bid}` is not finite")));
    }
    Ok(bid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuoteError;

    #[test]
    fn accepts_number_and_numeric_string() {
        let from_number = QuoteResponse::from_json_bytes(br#"{"bid": 5.25}"#).unwrap();
        let from_text = QuoteResponse::from_json_bytes(br#"{"bid": "5.25"}"#).unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_text.bid, 5.25);
    }

    #[test]
    fn server_writes_a_number() {
        let body = QuoteResponse::new(5.1234).to_json_bytes().unwrap();
        assert_eq!(body, br#"{"bid":5.1234}"#);
    }

    #[test]
    fn rejects_missing_or_garbage_bid() {
        let bodies: [&[u8]; 6] = [
            br#"{}"#,
            br#"{"bid": "abc"}"#,
            br#"{"bid": null}"#,
            br#"{"bid": "NaN"}"#,
            br#"{"bid": "inf"}"#,
            b"Internal",
        ];
        for body in bodies {
            assert!(matches!(
                QuoteResponse::from_json_bytes(body),
                Err(QuoteError::Decode(_))
            ));
        }
    }
}
