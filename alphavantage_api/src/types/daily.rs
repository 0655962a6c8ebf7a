//! Wire types for the daily time-series endpoint.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::MetaData;

/// Envelope returned by the `TIME_SERIES_DAILY` endpoint.
///
/// Error payloads (unknown symbol, rate-limit note) carry neither field, so
/// both default to empty and such a response decodes to an empty series
/// instead of a decode failure. The map is keyed by `YYYY-MM-DD` date
/// strings; `BTreeMap` iteration yields them in ascending, i.e.
/// chronological, order regardless of the order in the payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailySeries {
    #[serde(rename = "Meta Data", default)]
    pub meta_data: Option<MetaData>,

    #[serde(rename = "Time Series (Daily)", default)]
    pub time_series: BTreeMap<String, DailyBar>,
}

impl DailySeries {
    /// Number of trading days in the series.
    pub fn len(&self) -> usize {
        self.time_series.len()
    }

    /// True when the provider returned no bars (unknown symbol or error payload).
    pub fn is_empty(&self) -> bool {
        self.time_series.is_empty()
    }
}

/// One day of OHLCV data. The API sends every value as a decimal string,
/// volume included.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "1. open")]
    pub open: String,

    #[serde(rename = "2. high")]
    pub high: String,

    #[serde(rename = "3. low")]
    pub low: String,

    #[serde(rename = "4. close")]
    pub close: String,

    #[serde(rename = "5. volume")]
    pub volume: String,
}
