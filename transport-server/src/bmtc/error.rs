//! BMTC route provider error types.

#[derive(Debug, thiserror::Error)]
pub enum BmtcError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Base URL cannot carry path segments
    #[error("invalid base URL '{0}'")]
    InvalidUrl(String),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
