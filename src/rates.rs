//! Remote rate table fetch.
//!
//! The rate service is an external collaborator: one GET per invocation, no
//! retries. Two body shapes are accepted, a bare array of
//! `{"currencyCode", "basePrice"}` records and an object with a `rates`
//! mapping. Callers keep their previous table when the fetch fails.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{KursError, Result};

/// Request timeout in seconds.
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Capability for obtaining fresh conversion factors.
pub trait RateSource {
    fn fetch(&self, url: &str) -> Result<BTreeMap<String, f64>>;
}

/// Fetches rates over HTTP with a blocking client.
pub struct HttpRateSource;

impl RateSource for HttpRateSource {
    fn fetch(&self, url: &str) -> Result<BTreeMap<String, f64>> {
        log::debug!("fetching rates from {url}");
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;
        let body = client.get(url).send()?.error_for_status()?.text()?;
        parse_rates(&body)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireRates {
    Records(Vec<WireRecord>),
    Keyed { rates: BTreeMap<String, f64> },
}

#[derive(Deserialize)]
struct WireRecord {
    #[serde(rename = "currencyCode")]
    currency_code: String,
    #[serde(rename = "basePrice")]
    base_price: f64,
}

/// Parse either wire shape into a rate mapping. Non-positive factors are
/// dropped with a warning rather than failing the whole table.
pub fn parse_rates(body: &str) -> Result<BTreeMap<String, f64>> {
    let wire: WireRates = serde_json::from_str(body)
        .map_err(|e| KursError::MalformedRates(e.to_string()))?;
    let pairs: Vec<(String, f64)> = match wire {
        WireRates::Records(records) => records
            .into_iter()
            .map(|r| (r.currency_code, r.base_price))
            .collect(),
        WireRates::Keyed { rates } => rates.into_iter().collect(),
    };
    let mut table = BTreeMap::new();
    for (code, rate) in pairs {
        if rate > 0.0 && rate.is_finite() {
            table.insert(code, rate);
        } else {
            log::warn!("dropping non-positive rate for {code}: {rate}");
        }
    }
    Ok(table)
}
