//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::categorize::Categorized;
use crate::domain::BusRoute;
use crate::search::SearchOutcome;

/// Envelope for every response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Body of `search-buses` and `bmtc-buses`.
///
/// Absent fields read as empty so the handler can report which ones are
/// missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BusSearchRequest {
    pub from: String,
    pub to: String,
    /// DD-MM-YYYY; today when absent or empty
    pub date: Option<String>,
}

impl BusSearchRequest {
    pub fn has_endpoints(&self) -> bool {
        !self.from.is_empty() && !self.to.is_empty()
    }
}

/// Body of `bus-route`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusRouteRequest {
    pub bus_number: String,
}

/// Payload of `health`.
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: &'static str,
    pub service: &'static str,
    /// RFC 3339 local time
    pub time: String,
}

/// One local bus in a result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusEntry {
    pub bus_number: String,
    pub from: String,
    pub to: String,
    pub stops: Vec<String>,

    /// Only present in `search-buses` results
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl BusEntry {
    pub fn from_route(route: BusRoute) -> Self {
        Self {
            bus_number: route.bus_number,
            from: route.from,
            to: route.to,
            stops: route.stops,
            kind: None,
        }
    }

    fn tagged_bmtc(route: BusRoute) -> Self {
        Self {
            kind: Some("BMTC"),
            ..Self::from_route(route)
        }
    }
}

/// Payload of `search-buses`, tagged by which network answered.
#[derive(Debug, Serialize)]
#[serde(tag = "serviceType")]
pub enum SearchData {
    #[serde(rename = "BMTC")]
    Bmtc {
        buses: Vec<BusEntry>,
        from: String,
        to: String,
    },
    #[serde(rename = "KSRTC")]
    Ksrtc {
        from: String,
        to: String,
        date: String,
        #[serde(flatten)]
        categorized: Categorized,
    },
}

impl From<SearchOutcome> for SearchData {
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Local { from, to, buses } => SearchData::Bmtc {
                buses: buses.into_iter().map(BusEntry::tagged_bmtc).collect(),
                from,
                to,
            },
            SearchOutcome::Intercity {
                from,
                to,
                date,
                categorized,
                ..
            } => SearchData::Ksrtc {
                from,
                to,
                date,
                categorized,
            },
        }
    }
}

/// Payload of `bmtc-buses`.
#[derive(Debug, Serialize)]
pub struct LocalBusesData {
    pub buses: Vec<BusEntry>,
    pub from: String,
    pub to: String,
}
