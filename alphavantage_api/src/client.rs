//! HTTP client for the Alpha Vantage daily time-series API.

use std::time::Duration;

use url::Url;

use crate::{query::OutputSize, types::DailySeries, Error};

/// Request timeout for upstream API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production API host.
const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// REST client for the Alpha Vantage daily price endpoint.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: String) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn query_url(&self, symbol: &str, output_size: OutputSize) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}/query", self.base_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })?;
        url.query_pairs_mut()
            .append_pair("function", "TIME_SERIES_DAILY")
            .append_pair("symbol", symbol)
            .append_pair("outputsize", output_size.to_string().as_str())
            .append_pair("apikey", &self.api_key);
        Ok(url)
    }

    /// Fetches the daily OHLCV series for a ticker symbol.
    ///
    /// The symbol is trimmed and uppercased before the call, so `"ibm"` and
    /// `"IBM"` produce identical requests. An unknown symbol does not fail:
    /// the provider answers with an error payload that decodes to an empty
    /// series.
    pub async fn daily_series(
        &self,
        symbol: &str,
        output_size: OutputSize,
    ) -> Result<DailySeries, Error> {
        let symbol = symbol.trim().to_uppercase();
        let url = self.query_url(&symbol, output_size)?;

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach upstream API: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<DailySeries>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse daily series: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
