//! Exchange-rate quote model and provider payload parsing.
//!
//! The provider answers with a JSON object keyed by pair code:
//!
//! ```json
//! {"USDBRL": {"bid": "5.0512", "timestamp": "1700000000", ...}}
//! ```
//!
//! Only `bid` and `timestamp` are read. The bid stays text because it is only ever
//! displayed, never used in arithmetic.
use chrono::{Local, TimeZone};
use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;

/// Pair code under which the provider returns the USD/BRL quote.
pub const USD_BRL: &str = "USDBRL";
/// Display format for the quote timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fields of a single pair entry in the provider payload.
#[derive(Debug, Deserialize)]
struct PairQuote {
    bid: String,
    timestamp: String,
}

/// A fetched quote, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteResult {
    /// Bid price as sent by the provider.
    pub bid: String,
    /// Quote time rendered in local time with `TIMESTAMP_FORMAT`.
    pub timestamp: String,
}

/// Parses a provider response body and extracts the entry for `pair`.
///
/// Other top-level keys are ignored, whatever their shape.
pub fn parse_quote(body: &str, pair: &str) -> Result<QuoteResult, FetchError> {
    let mut payload: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid JSON: {}", e)))?;
    let raw = payload
        .get_mut(pair)
        .map(Value::take)
        .ok_or_else(|| FetchError::MalformedResponse(format!("missing pair {}", pair)))?;
    let entry: PairQuote = serde_json::from_value(raw)
        .map_err(|e| FetchError::MalformedResponse(format!("invalid {} entry: {}", pair, e)))?;

    Ok(QuoteResult {
        bid: entry.bid,
        timestamp: format_timestamp(&entry.timestamp)?,
    })
}

/// Renders Unix epoch seconds (as text) as a local date-time string.
pub fn format_timestamp(raw: &str) -> Result<String, FetchError> {
    let secs: i64 = raw
        .trim()
        .parse()
        .map_err(|e| FetchError::MalformedResponse(format!("invalid timestamp {:?}: {}", raw, e)))?;
    let time = Local
        .timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| FetchError::MalformedResponse(format!("timestamp out of range: {}", secs)))?;
    Ok(time.format(TIMESTAMP_FORMAT).to_string())
}
