//! Route lookup with template fallback.

use std::sync::Arc;

use tracing::warn;

use crate::domain::BusRoute;
use crate::network::RouteTemplates;

use super::client::BmtcClient;

/// Answers "what route does this bus run?", never failing.
#[derive(Debug, Clone)]
pub struct RouteDirectory {
    live: Option<BmtcClient>,
    templates: Arc<RouteTemplates>,
}

impl RouteDirectory {
    pub fn new(live: Option<BmtcClient>, templates: Arc<RouteTemplates>) -> Self {
        Self { live, templates }
    }

    /// Template-only directory.
    pub fn offline(templates: Arc<RouteTemplates>) -> Self {
        Self::new(None, templates)
    }

    /// The live route if the provider answers, else the template (or the
    /// generic route for unknown buses).
    pub async fn route(&self, bus_number: &str) -> BusRoute {
        if let Some(live) = &self.live {
            match live.fetch_route(bus_number).await {
                Ok(route) => return route,
                Err(e) => {
                    warn!(bus = bus_number, error = %e, "BMTC route lookup failed, using template")
                }
            }
        }
        self.templates.route(bus_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmtc::BmtcConfig;
    use axum::{Json, Router, extract::Path, routing::get};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn templates() -> Arc<RouteTemplates> {
        Arc::new(RouteTemplates::bangalore())
    }

    #[tokio::test]
    async fn offline_uses_templates() {
        let dir = RouteDirectory::offline(templates());
        let route = dir.route("500D").await;
        assert_eq!(route.stops.len(), 20);
        assert_eq!(dir.route("999Z").await.from, "Origin Terminal");
    }

    #[tokio::test]
    async fn live_route_preferred() {
        let router = Router::new().route(
            "/busNumber/:bus",
            get(|Path(bus): Path<String>| async move {
                let stops = vec!["Kempegowda".into(), "Attibele".into()];
                Json(BusRoute::new(bus, "Kempegowda", "Attibele", stops))
            }),
        );
        let url = serve(router).await;
        let client = BmtcClient::new(BmtcConfig::new().with_base_url(url)).unwrap();
        let dir = RouteDirectory::new(Some(client), templates());

        let route = dir.route("600").await;
        assert_eq!(route.bus_number, "600");
        assert_eq!(route.from, "Kempegowda");
    }

    #[tokio::test]
    async fn live_failure_falls_back() {
        let client = BmtcClient::new(
            BmtcConfig::new()
                .with_base_url("http://127.0.0.1:1")
                .with_timeout(2),
        )
        .unwrap();
        let dir = RouteDirectory::new(Some(client), templates());
        let route = dir.route("401K").await;
        assert_eq!(route.from, "Kadugodi");
    }
}
