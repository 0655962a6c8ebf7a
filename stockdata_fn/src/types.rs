//! Request and response shapes for one invocation.

use serde::{Deserialize, Serialize};

/// A single invocation request.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Opaque correlation identifier supplied by the caller. Recorded in the
    /// invocation log, otherwise unused.
    #[serde(default)]
    pub id: f64,

    /// Ticker symbol. Case-insensitive; uppercased before the upstream call.
    pub stock: String,
}

/// Daily price history as parallel columns, index-aligned by trading day.
///
/// All seven vectors have the same length. `date` is ascending, and
/// `epoch[i]` is the millisecond UTC-midnight timestamp of `date[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    /// Trading days as `YYYY-MM-DD`, ascending.
    pub date: Vec<String>,
    /// Milliseconds since the Unix epoch at UTC midnight of each trading day.
    pub epoch: Vec<i64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub open: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<i64>,
    /// Always true on a produced response.
    pub ok: bool,
}

/// Structured failure surface for the invocation boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}
