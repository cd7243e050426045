//! The classify, resolve or fetch, categorize pipeline.
//!
//! Both front ends run every query through [`SearchEngine::search`]; they
//! differ only in how the [`SearchOutcome`] is presented.

use chrono::Local;
use tracing::{debug, info};

use crate::categorize::{Categorized, Categorizer};
use crate::config::{ServerSettings, StartupError};
use crate::domain::{BusRoute, PlaceName};
use crate::ksrtc::{
    IntercityProvider, IntercityQuery, KsrtcClient, Provenance, ServiceSource, SyntheticGenerator,
};
use crate::network::{LocalNetwork, LocalRouteResolver, RouteTemplates};

/// Format used for journey dates on the wire.
pub const JOURNEY_DATE_FORMAT: &str = "%d-%m-%Y";

/// Today's date in journey-date format.
pub fn today_ddmmyyyy() -> String {
    Local::now().format(JOURNEY_DATE_FORMAT).to_string()
}

/// The answer to one query.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Both places are on the local network.
    Local {
        from: String,
        to: String,
        buses: Vec<BusRoute>,
    },
    /// Anything else.
    Intercity {
        from: String,
        to: String,
        date: String,
        categorized: Categorized,
        provenance: Provenance,
    },
}

/// Everything needed to answer a query. Immutable once built.
#[derive(Debug, Clone)]
pub struct SearchEngine<S> {
    network: LocalNetwork,
    resolver: LocalRouteResolver,
    intercity: IntercityProvider<S>,
    categorizer: Categorizer,
}

impl<S: ServiceSource> SearchEngine<S> {
    pub fn new(
        network: LocalNetwork,
        resolver: LocalRouteResolver,
        intercity: IntercityProvider<S>,
        categorizer: Categorizer,
    ) -> Self {
        Self {
            network,
            resolver,
            intercity,
            categorizer,
        }
    }

    pub fn is_local_trip(&self, from: &str, to: &str) -> bool {
        self.network
            .is_local_trip(&PlaceName::new(from), &PlaceName::new(to))
    }

    /// Local buses between two places, regardless of membership.
    pub fn local_buses(&self, from: &str, to: &str) -> Vec<BusRoute> {
        self.resolver
            .resolve(&PlaceName::new(from), &PlaceName::new(to))
    }

    /// Categorized intercity listings. An empty `date` means today.
    pub async fn intercity(
        &self,
        from: &str,
        to: &str,
        date: &str,
    ) -> (String, Categorized, Provenance) {
        let date = if date.is_empty() {
            today_ddmmyyyy()
        } else {
            date.to_string()
        };
        let query = IntercityQuery::new(PlaceName::new(from), PlaceName::new(to), date.clone());
        let result = self.intercity.search(&query).await;
        (date, self.categorizer.categorize(result.services), result.provenance)
    }

    /// Answer a query. Never fails: provider problems are absorbed below.
    pub async fn search(&self, from: &str, to: &str, date: Option<&str>) -> SearchOutcome {
        if self.is_local_trip(from, to) {
            let buses = self.local_buses(from, to);
            info!(from, to, count = buses.len(), "local search");
            return SearchOutcome::Local {
                from: from.to_string(),
                to: to.to_string(),
                buses,
            };
        }

        debug!(from, to, "not a local pair, searching intercity");
        let (date, categorized, provenance) =
            self.intercity(from, to, date.unwrap_or_default()).await;
        info!(
            from,
            to,
            %date,
            ?provenance,
            luxury = categorized.luxury_buses.len(),
            express = categorized.express_buses.len(),
            local = categorized.local_buses.len(),
            "intercity search"
        );
        SearchOutcome::Intercity {
            from: from.to_string(),
            to: to.to_string(),
            date,
            categorized,
            provenance,
        }
    }
}

impl SearchEngine<KsrtcClient> {
    /// Build the Bangalore/Karnataka engine described by `settings`.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, StartupError> {
        let profile = settings.profile;
        let live = if settings.offline {
            None
        } else {
            Some(KsrtcClient::new(settings.ksrtc.clone())?)
        };

        let resolver = LocalRouteResolver::new(
            profile.adjacency(),
            RouteTemplates::bangalore(),
            profile.stop_detail(),
        );
        let intercity = IntercityProvider::new(live, SyntheticGenerator::default())
            .with_fallback_on_empty(settings.fallback_on_empty())
            .with_seat_seed(settings.seat_seed);

        Ok(Self::new(
            LocalNetwork::bangalore(),
            resolver,
            intercity,
            Categorizer::new(profile.local_rule()),
        ))
    }
}
