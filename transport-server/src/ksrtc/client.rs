//! KSRTC availability HTTP client.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::domain::IntercityService;

use super::error::KsrtcError;
use super::types::{IntercityQuery, SearchResponse};

/// Default availability endpoint.
pub const DEFAULT_BASE_URL: &str = "https://ksrtc.in/oprs-web/avail/services.do";

/// The endpoint serves an HTML error page to unknown clients.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Characters of an unparseable body kept in the error.
const PREVIEW_CHARS: usize = 200;

/// Configuration for the KSRTC client.
#[derive(Debug, Clone)]
pub struct KsrtcConfig {
    /// Availability endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl KsrtcConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for KsrtcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the live KSRTC availability endpoint.
#[derive(Debug, Clone)]
pub struct KsrtcClient {
    http: reqwest::Client,
    base_url: String,
}

impl KsrtcClient {
    pub fn new(config: KsrtcConfig) -> Result<Self, KsrtcError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the services running between two places on a date.
    ///
    /// An HTML answer (by content type or by a leading `<`) is an error even
    /// with a 200 status.
    pub async fn fetch_services(
        &self,
        query: &IntercityQuery,
    ) -> Result<Vec<IntercityService>, KsrtcError> {
        debug!(
            url = %self.base_url,
            from = %query.from,
            to = %query.to,
            date = %query.date,
            "requesting KSRTC availability"
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("fromPlaceName", query.from.as_str()),
                ("toPlaceName", query.to.as_str()),
                ("journeyDate", query.date.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("text/html"));

        debug!(status = status.as_u16(), is_html, "KSRTC responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(KsrtcError::Api {
                status: status.as_u16(),
                message: preview(&body),
            });
        }

        let body = response.text().await?;

        if is_html || body.starts_with('<') {
            return Err(KsrtcError::Markup);
        }

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| KsrtcError::Json {
                message: e.to_string(),
                preview: preview(&body),
            })?;

        Ok(parsed.services)
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() > PREVIEW_CHARS {
        let mut cut: String = body.chars().take(PREVIEW_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        body.to_string()
    }
}
