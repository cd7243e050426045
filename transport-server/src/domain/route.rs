//! Local bus routes.

use serde::{Deserialize, Serialize};

/// A BMTC route: identifier, terminal stops and the ordered stops between.
///
/// This is also the wire shape of the BMTC route provider and of the
/// `bus-route` endpoint, hence the camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub bus_number: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub stops: Vec<String>,
}

impl BusRoute {
    pub fn new(
        bus_number: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        stops: Vec<String>,
    ) -> Self {
        Self {
            bus_number: bus_number.into(),
            from: from.into(),
            to: to.into(),
            stops,
        }
    }

    /// First stop, if the route has any.
    pub fn first_stop(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    /// Last stop, if the route has any.
    pub fn last_stop(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }
}
