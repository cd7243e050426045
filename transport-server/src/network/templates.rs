//! Per-route stop templates.

use std::collections::HashMap;

use crate::domain::{BusRoute, PlaceName};

const TEMPLATES: &[(&str, &str, &str, &[&str])] = &[
    (
        "500D",
        "Hebbal",
        "Silk Board",
        &[
            "Hebbal",
            "Veeranna Palya",
            "Manyata Tech Park",
            "Nagawara",
            "Hennur Cross",
            "Kalyan Nagar",
            "HRBR Layout",
            "Banaswadi",
            "Maruthi Sevanagar",
            "Ulsoor",
            "Trinity Circle",
            "MG Road",
            "Shivajinagar",
            "Richmond Circle",
            "Lalbagh West Gate",
            "South End Circle",
            "Jayanagar 4th Block",
            "JP Nagar 3rd Phase",
            "BTM Layout",
            "Silk Board",
        ],
    ),
    (
        "500C",
        "Hebbal",
        "Banashankari TTMC",
        &[
            "Hebbal",
            "Mekhri Circle",
            "Sadashivanagar",
            "Palace Guttahalli",
            "Majestic",
            "KR Market",
            "Lalbagh West Gate",
            "South End Circle",
            "Jayanagar 4th Block",
            "Jayanagar 5th Block",
            "Banashankari Temple",
            "Banashankari TTMC",
        ],
    ),
    (
        "401K",
        "Kadugodi",
        "Majestic",
        &[
            "Kadugodi",
            "Whitefield",
            "Hope Farm",
            "Varthur",
            "Marathahalli",
            "HAL",
            "Indiranagar",
            "Ulsoor",
            "MG Road",
            "Shivajinagar",
            "Majestic",
        ],
    ),
];

/// Known stop sequences, one per bus identifier.
#[derive(Debug, Clone, Default)]
pub struct RouteTemplates {
    routes: HashMap<String, BusRoute>,
}

impl RouteTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates for the Bangalore trunk routes.
    pub fn bangalore() -> Self {
        let mut templates = Self::new();
        for (bus, from, to, stops) in TEMPLATES {
            let stops = stops.iter().map(|s| (*s).to_string()).collect();
            templates.insert(BusRoute::new(*bus, *from, *to, stops));
        }
        templates
    }

    pub fn insert(&mut self, route: BusRoute) {
        self.routes.insert(route.bus_number.clone(), route);
    }

    /// The template for a bus, if one is known.
    pub fn get(&self, bus_number: &str) -> Option<&BusRoute> {
        self.routes.get(bus_number)
    }

    /// The template for a bus, or a generic five-stop route for unknown ones.
    pub fn route(&self, bus_number: &str) -> BusRoute {
        self.get(bus_number)
            .cloned()
            .unwrap_or_else(|| generic_route(bus_number))
    }

    /// The route for a bus cut down to the user's trip.
    ///
    /// When both places occur on the template with the origin first, the
    /// template is sliced to that range and its ends are relabelled with the
    /// user's spelling. Otherwise a four-stop placeholder between the user's
    /// places is returned. Unknown buses get the generic route regardless of
    /// the trip.
    pub fn tailored(&self, bus_number: &str, from: &PlaceName, to: &PlaceName) -> BusRoute {
        let Some(template) = self.get(bus_number) else {
            return generic_route(bus_number);
        };

        let from_idx = position_of(&template.stops, from);
        let to_idx = position_of(&template.stops, to);

        let stops = match (from_idx, to_idx) {
            (Some(start), Some(end)) if start < end => {
                let mut stops = template.stops[start..=end].to_vec();
                stops[0] = from.as_str().to_string();
                stops[end - start] = to.as_str().to_string();
                stops
            }
            _ => vec![
                from.as_str().to_string(),
                "Intermediate Stop 1".to_string(),
                "Intermediate Stop 2".to_string(),
                to.as_str().to_string(),
            ],
        };

        BusRoute::new(bus_number, from.as_str(), to.as_str(), stops)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// First stop matching the place, where either name contains the other.
fn position_of(stops: &[String], place: &PlaceName) -> Option<usize> {
    stops.iter().position(|stop| {
        let stop = stop.to_lowercase();
        stop.contains(place.key()) || place.key().contains(stop.as_str())
    })
}

fn generic_route(bus_number: &str) -> BusRoute {
    BusRoute::new(
        bus_number,
        "Origin Terminal",
        "Destination Terminal",
        (1..=5).map(|i| format!("Stop {i}")).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(s: &str) -> PlaceName {
        PlaceName::new(s)
    }

    #[test]
    fn known_template() {
        let templates = RouteTemplates::bangalore();
        let route = templates.route("500D");
        assert_eq!(route.from, "Hebbal");
        assert_eq!(route.to, "Silk Board");
        assert_eq!(route.stops.len(), 20);
        assert_eq!(route.first_stop(), Some("Hebbal"));
        assert_eq!(route.last_stop(), Some("Silk Board"));
    }

    #[test]
    fn unknown_bus_gets_generic_route() {
        let templates = RouteTemplates::bangalore();
        let route = templates.route("KIAS-8");
        assert_eq!(route.bus_number, "KIAS-8");
        assert_eq!(route.from, "Origin Terminal");
        assert_eq!(route.to, "Destination Terminal");
        assert_eq!(route.stops, vec!["Stop 1", "Stop 2", "Stop 3", "Stop 4", "Stop 5"]);
    }

    #[test]
    fn tailored_slices_and_relabels() {
        let templates = RouteTemplates::bangalore();
        let route = templates.tailored("500D", &place("mg road"), &place("silk board"));
        assert_eq!(route.from, "mg road");
        assert_eq!(route.to, "silk board");
        assert_eq!(
            route.stops,
            vec![
                "mg road",
                "Shivajinagar",
                "Richmond Circle",
                "Lalbagh West Gate",
                "South End Circle",
                "Jayanagar 4th Block",
                "JP Nagar 3rd Phase",
                "BTM Layout",
                "silk board",
            ]
        );
    }

    #[test]
    fn tailored_matches_substrings_both_ways() {
        let templates = RouteTemplates::bangalore();
        // "jayanagar" is contained in "Jayanagar 4th Block".
        let route = templates.tailored("500C", &place("Majestic"), &place("Jayanagar"));
        assert_eq!(route.stops.first().map(String::as_str), Some("Majestic"));
        assert_eq!(route.stops.last().map(String::as_str), Some("Jayanagar"));
        assert_eq!(route.stops.len(), 5);
    }

    #[test]
    fn tailored_first_occurrence_wins() {
        let templates = RouteTemplates::bangalore();
        // "Jayanagar" matches both the 4th and 5th block stops; the 4th comes first.
        let route = templates.tailored("500C", &place("Hebbal"), &place("Jayanagar"));
        assert_eq!(route.stops.len(), 9);
    }

    #[test]
    fn tailored_wrong_direction_gives_placeholder() {
        let templates = RouteTemplates::bangalore();
        let route = templates.tailored("500D", &place("Silk Board"), &place("Hebbal"));
        assert_eq!(
            route.stops,
            vec!["Silk Board", "Intermediate Stop 1", "Intermediate Stop 2", "Hebbal"]
        );
        assert_eq!(route.from, "Silk Board");
    }

    #[test]
    fn tailored_missing_stop_gives_placeholder() {
        let templates = RouteTemplates::bangalore();
        let route = templates.tailored("401K", &place("Whitefield"), &place("Koramangala"));
        assert_eq!(route.stops.len(), 4);
        assert_eq!(route.stops[3], "Koramangala");
    }

    #[test]
    fn tailored_unknown_bus_ignores_trip() {
        let templates = RouteTemplates::bangalore();
        let route = templates.tailored("V-500D", &place("MG Road"), &place("Silk Board"));
        assert_eq!(route.from, "Origin Terminal");
        assert_eq!(route.stops.len(), 5);
    }
}
