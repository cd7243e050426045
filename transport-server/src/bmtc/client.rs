//! BMTC route HTTP client.

use reqwest::Url;
use tracing::debug;

use crate::domain::BusRoute;

use super::error::BmtcError;

/// Default route provider.
pub const DEFAULT_BASE_URL: &str = "https://mybmtcroute.herokuapp.com";

#[derive(Debug, Clone)]
pub struct BmtcConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl BmtcConfig {
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

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BmtcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the BMTC route provider, keyed by bus number in the path.
#[derive(Debug, Clone)]
pub struct BmtcClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BmtcClient {
    pub fn new(config: BmtcConfig) -> Result<Self, BmtcError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| BmtcError::InvalidUrl(config.base_url.clone()))?;

        Ok(Self { http, base_url })
    }

    /// `{base}/busNumber/{bus}`, with the bus number encoded as one segment.
    fn route_url(&self, bus_number: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("busNumber").push(bus_number);
        }
        url
    }

    /// Fetch the route for one bus.
    pub async fn fetch_route(&self, bus_number: &str) -> Result<BusRoute, BmtcError> {
        let url = self.route_url(bus_number);
        debug!(%url, "requesting BMTC route");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BmtcError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| BmtcError::Json {
            message: e.to_string(),
        })
    }
}
