//! Text rendering of search results.

use askama::Template;

use crate::categorize::Categorized;
use crate::domain::{BusRoute, IntercityService};

/// Stops listed per local bus before the rest are summarised.
const KEY_STOPS: usize = 5;

const RULE: &str = "─────────────────────────────────────";

/// Local search results.
#[derive(Template)]
#[template(path = "local_results.txt")]
pub struct LocalResultsTemplate {
    pub from: String,
    pub to: String,
    pub buses: Vec<LocalBusView>,
    pub rule: &'static str,
}

/// Intercity search results.
#[derive(Template)]
#[template(path = "intercity_results.txt")]
pub struct IntercityResultsTemplate {
    pub from: String,
    pub to: String,
    pub display_date: String,
    pub total: usize,
    pub sections: Vec<SectionView>,
    pub rule: &'static str,
}

#[derive(Debug, Clone)]
pub struct LocalBusView {
    pub bus_number: String,
    pub from: String,
    pub to: String,
    pub key_stops: Vec<String>,
    /// Stops not listed in `key_stops`
    pub more_stops: usize,
}

impl From<&BusRoute> for LocalBusView {
    fn from(route: &BusRoute) -> Self {
        let shown = route.stops.len().min(KEY_STOPS);
        Self {
            bus_number: route.bus_number.clone(),
            from: route.from.clone(),
            to: route.to.clone(),
            key_stops: route.stops[..shown].to_vec(),
            more_stops: route.stops.len() - shown,
        }
    }
}

/// One non-empty bucket of intercity results.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub heading: &'static str,
    pub services: Vec<ServiceView>,
}

#[derive(Debug, Clone)]
pub struct ServiceView {
    pub name: String,
    pub departure: String,
    pub arrival: String,
    pub seats: i64,
    pub fare: String,
    pub bus_type: String,
    pub has_rating: bool,
    pub rating: String,
}

impl From<&IntercityService> for ServiceView {
    fn from(svc: &IntercityService) -> Self {
        let rating = svc.rating.clone().unwrap_or_default();
        Self {
            name: svc.service_name.clone(),
            departure: svc.departure_time.clone(),
            arrival: svc.arrival_time.clone(),
            seats: svc.available_seats,
            fare: svc.fare.clone(),
            bus_type: svc.bus_type.clone(),
            has_rating: !rating.is_empty(),
            rating,
        }
    }
}

fn section(heading: &'static str, services: &[IntercityService]) -> Option<SectionView> {
    (!services.is_empty()).then(|| SectionView {
        heading,
        services: services.iter().map(ServiceView::from).collect(),
    })
}

pub fn render_local(from: &str, to: &str, buses: &[BusRoute]) -> askama::Result<String> {
    LocalResultsTemplate {
        from: from.to_string(),
        to: to.to_string(),
        buses: buses.iter().map(LocalBusView::from).collect(),
        rule: RULE,
    }
    .render()
}

pub fn render_intercity(
    from: &str,
    to: &str,
    display_date: &str,
    results: &Categorized,
) -> askama::Result<String> {
    let sections = [
        section("🌟 LUXURY BUSES (AC/VOLVO/SLEEPER) 🌟", &results.luxury_buses),
        section("🚀 EXPRESS BUSES 🚀", &results.express_buses),
        section("🚶 LOCAL BUSES (ORDINARY/SARIGE) 🚶", &results.local_buses),
    ]
    .into_iter()
    .flatten()
    .collect();

    IntercityResultsTemplate {
        from: from.to_string(),
        to: to.to_string(),
        display_date: display_date.to_string(),
        total: results.total(),
        sections,
        rule: RULE,
    }
    .render()
}
