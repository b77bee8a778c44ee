//! Error types for the scraper library.
//!
//! The binary wraps these in `anyhow` at the edge; everything below `main`
//! returns [`ScoutError`] so callers can tell transport failures apart from
//! broken page assumptions.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScoutError>;

#[derive(Debug, Error)]
pub enum ScoutError {
    /// Request could not be completed (DNS, connect, TLS, body read)
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid search URL: {0}")]
    InvalidUrl(String),

    /// Pagination marker not present on a results page
    #[error("results page has no `{marker}` element")]
    MissingMarker { marker: &'static str },

    /// Pagination marker present but not a count
    #[error("results page `{marker}` element is not a number: {text:?}")]
    InvalidMarker { marker: &'static str, text: String },

    /// Price field present but not a number
    #[error("listing {} price is not a number: {text:?}", pid.as_deref().unwrap_or("<no pid>"))]
    InvalidPrice { pid: Option<String>, text: String },

    #[error("no listing prices to aggregate")]
    NoPrices,

    /// Prices too large to aggregate as finite numbers
    #[error("listing prices overflow when aggregated")]
    PriceOverflow,

    /// Next page offset does not fit in a u32
    #[error("page offset {offset} + stride {stride} overflows")]
    OffsetOverflow { offset: u32, stride: u32 },

    #[error("failed to read config: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<std::io::Error> for ScoutError {
    fn from(err: std::io::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
