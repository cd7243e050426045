//! Application state for the web layer.

use std::sync::Arc;

use crate::bmtc::{BmtcClient, RouteDirectory};
use crate::config::{ServerSettings, StartupError};
use crate::ksrtc::KsrtcClient;
use crate::network::RouteTemplates;
use crate::search::SearchEngine;

/// Shared application state.
///
/// Read-only after startup; handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Classify, resolve and fetch pipeline
    pub engine: Arc<SearchEngine<KsrtcClient>>,

    /// Route lookup for `bus-route`
    pub directory: Arc<RouteDirectory>,
}

impl AppState {
    pub fn new(engine: SearchEngine<KsrtcClient>, directory: RouteDirectory) -> Self {
        Self {
            engine: Arc::new(engine),
            directory: Arc::new(directory),
        }
    }

    /// Build everything from settings. Fails only if an HTTP client cannot be
    /// constructed.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, StartupError> {
        let engine = SearchEngine::from_settings(settings)?;

        let templates = Arc::new(RouteTemplates::bangalore());
        let directory = match &settings.bmtc {
            Some(config) if !settings.offline => {
                RouteDirectory::new(Some(BmtcClient::new(config.clone())?), templates)
            }
            _ => RouteDirectory::offline(templates),
        };

        Ok(Self::new(engine, directory))
    }
}
