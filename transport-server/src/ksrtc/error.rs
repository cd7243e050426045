//! KSRTC client error types.

/// Errors from the live KSRTC availability endpoint.
#[derive(Debug, thiserror::Error)]
pub enum KsrtcError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Endpoint answered with an HTML page instead of JSON
    #[error("received HTML response instead of JSON")]
    Markup,

    /// JSON deserialization failed
    #[error("JSON parse error: {message} (response preview: {preview})")]
    Json { message: String, preview: String },
}
