//! The fetch-transform handler for one invocation.

use alphavantage_api::{Client, OutputSize};

use crate::error::HandlerError;
use crate::transform;
use crate::types::{Request, SeriesResponse};

/// Handles one request: fetches the full daily history for the requested
/// symbol and reshapes it into index-aligned columns.
///
/// An unknown symbol or provider error payload yields an empty series, which
/// comes back as `ok: true` with all-empty columns. Transport, status, and
/// decode failures surface as [`HandlerError`].
pub async fn handle(request: &Request, client: &Client) -> Result<SeriesResponse, HandlerError> {
    tracing::info!(
        correlation_id = request.id,
        stock = %request.stock,
        "fetching daily series"
    );

    let series = client
        .daily_series(&request.stock, OutputSize::Full)
        .await?;

    if let Some(meta) = &series.meta_data {
        tracing::debug!(
            symbol = %meta.symbol,
            last_refreshed = %meta.last_refreshed,
            "upstream metadata"
        );
    }

    Ok(transform::columns(&series.time_series))
}
