//! Local-network membership.

use std::collections::HashSet;

use crate::domain::PlaceName;

/// Stops served by BMTC, lowercased.
const BANGALORE_STOPS: &[&str] = &[
    "mg road",
    "majestic",
    "silk board",
    "hebbal",
    "whitefield",
    "electronic city",
    "jayanagar",
    "indiranagar",
    "marathahalli",
    "btm layout",
    "koramangala",
    "hsr layout",
    "jp nagar",
    "channasandra",
    "kengeri",
    "bannerghatta road",
    "airport",
    "yeshwanthpur",
    "shivajinagar",
    "kr puram",
    "tin factory",
    "domlur",
    "brigade road",
    "richmond road",
    "commercial street",
    "vijayanagar",
    "banashankari",
    "yelahanka",
    "malleswaram",
    "basavanagudi",
    "rajajinagar",
];

/// The fixed vocabulary of place names treated as local trips.
///
/// Used only to classify a query; routing itself goes through the adjacency
/// tables, which know fewer places.
#[derive(Debug, Clone)]
pub struct LocalNetwork {
    names: HashSet<String>,
}

impl LocalNetwork {
    /// The Bangalore BMTC stop set.
    pub fn bangalore() -> Self {
        Self::from_names(BANGALORE_STOPS.iter().copied())
    }

    /// Build a network from arbitrary names (lowercased on the way in).
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            names: names.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Exact, case-insensitive membership. No trimming, no partial matches.
    pub fn contains(&self, place: &PlaceName) -> bool {
        self.names.contains(place.key())
    }

    /// A trip is local only when both ends are on the network.
    pub fn is_local_trip(&self, from: &PlaceName, to: &PlaceName) -> bool {
        self.contains(from) && self.contains(to)
    }

    /// All member names in lowercase, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(s: &str) -> PlaceName {
        PlaceName::new(s)
    }

    #[test]
    fn bangalore_has_31_stops() {
        assert_eq!(LocalNetwork::bangalore().len(), 31);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let net = LocalNetwork::bangalore();
        assert!(net.contains(&place("MG Road")));
        assert!(net.contains(&place("KORAMANGALA")));
        assert!(net.contains(&place("kr puram")));
    }

    #[test]
    fn no_fuzzy_matching() {
        let net = LocalNetwork::bangalore();
        assert!(!net.contains(&place("Mg  Road")));
        assert!(!net.contains(&place("MG Road ")));
        assert!(!net.contains(&place("MG")));
        assert!(!net.contains(&place("Koramangala 5th Block")));
    }

    #[test]
    fn trip_is_local_only_when_both_ends_match() {
        let net = LocalNetwork::bangalore();
        assert!(net.is_local_trip(&place("MG Road"), &place("Silk Board")));
        assert!(!net.is_local_trip(&place("MG Road"), &place("Mysuru")));
        assert!(!net.is_local_trip(&place("Mumbai"), &place("Silk Board")));
        assert!(!net.is_local_trip(&place("Mumbai"), &place("Pune")));
    }
}
