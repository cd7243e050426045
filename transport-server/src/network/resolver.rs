//! Local route resolution.
//!
//! Finds the buses that connect two local places: a direct table lookup
//! first, then a search through the major hubs, then a fixed fallback list so
//! the answer is never empty.

use tracing::debug;

use crate::domain::{BusRoute, PlaceName};

use super::tables::AdjacencyTable;
use super::templates::RouteTemplates;

/// Hubs tried, in order, when no direct bus exists.
const HUBS: &[&str] = &["majestic", "mg road", "silk board"];

/// Returned when neither a direct bus nor a hub connection is found.
const FALLBACK_BUSES: &[&str] = &["500D", "500C", "500K"];

/// How stop sequences are attached to resolved buses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopDetail {
    /// Slice each template to the user's trip (see [`RouteTemplates::tailored`]).
    Tailored,
    /// Return each template unchanged.
    Template,
}

/// Resolves local trips to bus identifiers and stop sequences.
///
/// Deterministic: the same query always yields the same answer.
#[derive(Debug, Clone)]
pub struct LocalRouteResolver {
    table: AdjacencyTable,
    templates: RouteTemplates,
    stop_detail: StopDetail,
    hubs: Vec<String>,
    fallback: Vec<String>,
}

impl LocalRouteResolver {
    /// Create a resolver with the Bangalore hubs and fallback list.
    pub fn new(table: AdjacencyTable, templates: RouteTemplates, stop_detail: StopDetail) -> Self {
        Self {
            table,
            templates,
            stop_detail,
            hubs: HUBS.iter().map(|h| (*h).to_string()).collect(),
            fallback: FALLBACK_BUSES.iter().map(|b| (*b).to_string()).collect(),
        }
    }

    /// Bus identifiers believed to connect the two places. Never empty.
    pub fn bus_numbers(&self, from: &PlaceName, to: &PlaceName) -> Vec<String> {
        let mut buses = self.table.direct(from, to);
        if !buses.is_empty() {
            debug!(from = %from, to = %to, count = buses.len(), "direct buses found");
            return buses;
        }

        let from_buses = self.table.buses_at(from.key());
        let to_buses = self.table.buses_at(to.key());
        let excluded = self.table.hub_exclusions(from, to);

        for hub in &self.hubs {
            let hub_buses = self.table.buses_at(hub);
            if hub_buses.is_empty() {
                continue;
            }
            let from_reaches = from_buses.iter().any(|b| hub_buses.contains(b));
            let to_reaches = to_buses.iter().any(|b| hub_buses.contains(b));
            if from_reaches && to_reaches {
                debug!(from = %from, to = %to, hub = %hub, "connecting through hub");
                for bus in hub_buses {
                    if !buses.contains(&bus) && !excluded.contains(&bus) {
                        buses.push(bus);
                    }
                }
            }
        }

        if buses.is_empty() {
            debug!(from = %from, to = %to, "no connection found, using fallback buses");
            buses = self.fallback.clone();
        }

        buses
    }

    /// Resolve a trip to routes, one per bus, with stop sequences attached.
    pub fn resolve(&self, from: &PlaceName, to: &PlaceName) -> Vec<BusRoute> {
        self.bus_numbers(from, to)
            .iter()
            .map(|bus| match self.stop_detail {
                StopDetail::Tailored => self.templates.tailored(bus, from, to),
                StopDetail::Template => self.templates.route(bus),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{LocalNetwork, PairTable, StopTable};

    fn place(s: &str) -> PlaceName {
        PlaceName::new(s)
    }

    fn pairs_resolver() -> LocalRouteResolver {
        LocalRouteResolver::new(
            AdjacencyTable::bangalore_pairs(),
            RouteTemplates::bangalore(),
            StopDetail::Tailored,
        )
    }

    fn stops_resolver() -> LocalRouteResolver {
        LocalRouteResolver::new(
            AdjacencyTable::bangalore_stops(),
            RouteTemplates::bangalore(),
            StopDetail::Template,
        )
    }

    #[test]
    fn direct_forward_entry_is_returned() {
        let buses = pairs_resolver().bus_numbers(&place("MG Road"), &place("Silk Board"));
        assert_eq!(buses, vec!["500D", "V-500D", "500M", "301K"]);
    }

    #[test]
    fn reverse_entry_is_used() {
        let buses = pairs_resolver().bus_numbers(&place("Airport"), &place("Majestic"));
        assert_eq!(buses, vec!["KIAS-5", "KIAS-8", "KIAS-4A"]);
    }

    #[test]
    fn hub_connection_for_stop_table() {
        // hebbal and whitefield share no bus; majestic and silk board reach
        // both. Hebbal's own buses are never offered as connections.
        let buses = stops_resolver().bus_numbers(&place("Hebbal"), &place("Whitefield"));
        assert_eq!(buses, vec!["401K", "330E", "201", "335E", "335P", "201A"]);
    }

    #[test]
    fn hub_skips_origin_buses_only_when_both_stops_listed() {
        let mut stops = StopTable::new();
        stops.insert("a", vec!["1".into()]);
        stops.insert("b", vec!["9".into()]);
        stops.insert("majestic", vec!["1".into(), "9".into(), "2".into()]);
        let resolver = LocalRouteResolver::new(
            AdjacencyTable::Stops(stops),
            RouteTemplates::new(),
            StopDetail::Template,
        );
        assert_eq!(resolver.bus_numbers(&place("a"), &place("b")), vec!["9", "2"]);
    }

    #[test]
    fn hub_exclusions_by_table_kind() {
        let stops = AdjacencyTable::bangalore_stops();
        assert_eq!(
            stops.hub_exclusions(&place("Hebbal"), &place("Whitefield")),
            vec!["500D", "500C", "500A", "500K"]
        );
        assert!(stops.hub_exclusions(&place("Hebbal"), &place("Domlur")).is_empty());
        let pairs = AdjacencyTable::bangalore_pairs();
        assert!(pairs.hub_exclusions(&place("Hebbal"), &place("Whitefield")).is_empty());
    }

    #[test]
    fn hub_connection_for_pair_table() {
        let mut pairs = PairTable::new();
        pairs.insert("a", "x", vec!["1".into()]);
        pairs.insert("b", "y", vec!["2".into()]);
        pairs.insert("majestic", "z", vec!["1".into(), "2".into(), "3".into()]);
        let resolver = LocalRouteResolver::new(
            AdjacencyTable::Pairs(pairs),
            RouteTemplates::new(),
            StopDetail::Tailored,
        );
        assert_eq!(
            resolver.bus_numbers(&place("A"), &place("B")),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn hub_needs_both_ends() {
        let mut stops = StopTable::new();
        stops.insert("a", vec!["1".into()]);
        stops.insert("b", vec!["9".into()]);
        stops.insert("majestic", vec!["1".into(), "2".into()]);
        let resolver = LocalRouteResolver::new(
            AdjacencyTable::Stops(stops),
            RouteTemplates::new(),
            StopDetail::Template,
        );
        assert_eq!(
            resolver.bus_numbers(&place("a"), &place("b")),
            vec!["500D", "500C", "500K"]
        );
    }

    #[test]
    fn fallback_when_nothing_connects() {
        let buses = pairs_resolver().bus_numbers(&place("Domlur"), &place("Kengeri"));
        assert_eq!(buses, vec!["500D", "500C", "500K"]);
    }

    #[test]
    fn tailored_routes_echo_user_input() {
        let routes = pairs_resolver().resolve(&place("MG Road"), &place("Silk Board"));
        let first = &routes[0];
        assert_eq!(first.bus_number, "500D");
        assert_eq!(first.from, "MG Road");
        assert_eq!(first.to, "Silk Board");
        assert_eq!(first.first_stop(), Some("MG Road"));
        assert_eq!(first.last_stop(), Some("Silk Board"));
    }

    #[test]
    fn template_routes_keep_template_names() {
        let routes = stops_resolver().resolve(&place("MG Road"), &place("Silk Board"));
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].from, "Hebbal");
        assert_eq!(routes[0].stops.len(), 20);
    }

    #[test]
    fn every_local_pair_resolves() {
        let net = LocalNetwork::bangalore();
        for resolver in [pairs_resolver(), stops_resolver()] {
            for from in net.names() {
                for to in net.names() {
                    let buses = resolver.bus_numbers(&place(from), &place(to));
                    assert!(!buses.is_empty(), "{from} -> {to}");
                }
            }
        }
    }
}
