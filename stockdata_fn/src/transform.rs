//! Reshapes a date-keyed daily series into parallel columns.

use std::collections::BTreeMap;

use alphavantage_api::types::DailyBar;
use chrono::{NaiveDate, NaiveTime};

use crate::types::SeriesResponse;

/// Builds the columnar response from an ordered series map.
///
/// Iteration over the map is ascending by date string, which for
/// `YYYY-MM-DD` keys is chronological order. Malformed numeric fields
/// become `0.0`/`0` rather than failing the invocation; an unparseable
/// date key gets epoch `0` under the same policy.
pub fn columns(series: &BTreeMap<String, DailyBar>) -> SeriesResponse {
    let n = series.len();
    let mut date = Vec::with_capacity(n);
    let mut epoch = Vec::with_capacity(n);
    let mut high = Vec::with_capacity(n);
    let mut low = Vec::with_capacity(n);
    let mut open = Vec::with_capacity(n);
    let mut close = Vec::with_capacity(n);
    let mut volume = Vec::with_capacity(n);

    for (day, bar) in series {
        let epoch_ms = epoch_ms(day);
        tracing::debug!(date = %day, epoch_ms, "processed trading day");

        date.push(day.clone());
        epoch.push(epoch_ms);
        high.push(parse_price(&bar.high));
        low.push(parse_price(&bar.low));
        open.push(parse_price(&bar.open));
        close.push(parse_price(&bar.close));
        volume.push(parse_volume(&bar.volume));
    }

    SeriesResponse {
        date,
        epoch,
        high,
        low,
        open,
        close,
        volume,
        ok: true,
    }
}

/// Parses a decimal price string, defaulting to 0.0 on malformed input.
fn parse_price(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Parses an integer volume string, defaulting to 0 on malformed input.
fn parse_volume(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Milliseconds since the Unix epoch at UTC midnight of a `YYYY-MM-DD` day.
fn epoch_ms(day: &str) -> i64 {
    NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
        .unwrap_or(0)
}
