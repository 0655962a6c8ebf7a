use serde::Deserialize;

/// The `"Meta Data"` block of a time-series response.
///
/// The API labels every field with a numbered key.
#[derive(Debug, Clone, Deserialize)]
pub struct MetaData {
    #[serde(rename = "1. Information")]
    pub information: String,

    /// Ticker symbol the series was resolved for.
    #[serde(rename = "2. Symbol")]
    pub symbol: String,

    /// Date of the most recent bar, as reported by the provider.
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,

    #[serde(rename = "4. Output Size")]
    pub output_size: String,

    #[serde(rename = "5. Time Zone")]
    pub time_zone: String,
}
