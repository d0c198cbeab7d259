//! Currency codes and the currency pair requested from the quote provider.
//!
//! The provider addresses a pair as `USD-BRL` in the URL and nests the quote under
//! `USDBRL` in its response body; `CurrencyPair` knows both spellings.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::QuoteError;

/// Set of supported currency codes.
#[allow(missing_docs)]
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Display, EnumString, Hash, Eq, PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    USD,
    BRL,
    EUR,
    GBP,
    JPY,
    CHF,
    CAD,
    AUD,
    ARS,
    CNY,
    BTC,
    ETH,
}

/// A `base`/`quote` pair such as USD priced in BRL.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct CurrencyPair {
    /// Currency being priced.
    pub base: Currency,
    /// Currency the price is expressed in.
    pub quote: Currency,
}

impl CurrencyPair {
    /// Creates a new pair.
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Key under which the provider nests the quote object, e.g. `USDBRL`.
    pub fn payload_key(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self::new(Currency::USD, Currency::BRL)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.quote)
    }
}

impl FromStr for CurrencyPair {
    type Err = QuoteError;

    /// Parses the provider URL spelling, `BASE-QUOTE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, quote) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| QuoteError::Config(format!("expected BASE-QUOTE, got `{s}`")))?;
        let parse = |code: &str| {
            code.parse::<Currency>()
                .map_err(|e| QuoteError::Config(format!("unknown currency `{code}`: {e}")))
        };
        let pair = Self::new(parse(base)?, parse(quote)?);
        if pair.base == pair.quote {
            return Err(QuoteError::Config(format!("degenerate pair `{s}`")));
        }
        Ok(pair)
    }
}
