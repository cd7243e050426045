//! Adjacency tables: which buses connect two stops.
//!
//! Two granularities exist. [`PairTable`] is keyed by origin and then
//! destination and lists the buses for that specific pair. [`StopTable`]
//! lists the buses calling at each stop; two stops are directly connected by
//! the buses they share.

use std::collections::HashMap;

use crate::domain::PlaceName;

type PairRows = &'static [(&'static str, &'static [(&'static str, &'static [&'static str])])];
type StopRows = &'static [(&'static str, &'static [&'static str])];

const BANGALORE_PAIRS: PairRows = &[
    (
        "mg road",
        &[
            ("silk board", &["500D", "V-500D", "500M", "301K"]),
            ("electronic city", &["500K", "V-500K", "501D"]),
            ("hebbal", &["500D", "V-500D", "201C"]),
            ("whitefield", &["401K", "335E", "KIAS-8"]),
            ("majestic", &["294C", "KIAS-5", "KIAS-8"]),
            ("indiranagar", &["201B", "505F", "301K"]),
            ("koramangala", &["201G", "500D", "V-500D"]),
            ("btm layout", &["500D", "501C", "301K"]),
            ("jp nagar", &["500D", "501L", "304"]),
        ],
    ),
    (
        "majestic",
        &[
            ("silk board", &["500C", "500K", "600"]),
            ("electronic city", &["356CW", "501D", "600"]),
            ("hebbal", &["500C", "500A", "G-4"]),
            ("whitefield", &["401K", "303", "304"]),
            ("airport", &["KIAS-5", "KIAS-8", "KIAS-4A"]),
            ("yeshwanthpur", &["249", "252E", "252F"]),
            ("jayanagar", &["12K", "15", "16"]),
            ("koramangala", &["171", "201", "213"]),
            ("btm layout", &["500D", "500C", "600"]),
            ("jp nagar", &["500D", "501L", "304"]),
        ],
    ),
    (
        "silk board",
        &[
            ("electronic city", &["500K", "501K", "V-500K"]),
            ("hebbal", &["500D", "V-500D", "500"]),
            ("whitefield", &["500M", "500", "V-500"]),
            ("majestic", &["500C", "500K", "600"]),
            ("mg road", &["500D", "V-500D", "301K"]),
            ("jayanagar", &["500D", "V-500D", "342D"]),
            ("koramangala", &["201", "500D", "V-500D"]),
            ("btm layout", &["201", "500D", "V-500D"]),
            ("jp nagar", &["201", "500D", "501D"]),
        ],
    ),
    (
        "hebbal",
        &[
            ("silk board", &["500D", "V-500D", "501"]),
            ("electronic city", &["501D", "600", "501"]),
            ("whitefield", &["500M", "501", "G-4"]),
            ("majestic", &["500C", "500A", "G-4"]),
            ("mg road", &["500D", "V-500D", "201C"]),
            ("yeshwanthpur", &["401M", "G-2", "G-3"]),
            ("airport", &["KIAS-8", "KIAS-5", "401"]),
        ],
    ),
    (
        "whitefield",
        &[
            ("silk board", &["500M", "500", "V-500"]),
            ("electronic city", &["500M", "501", "V-500"]),
            ("hebbal", &["500M", "501", "G-4"]),
            ("majestic", &["401K", "303", "304"]),
            ("mg road", &["401K", "335E", "KIAS-8"]),
            ("indiranagar", &["401K", "500F", "ITPL-2"]),
            ("marathahalli", &["500L", "ITPL-1", "ITPL-3"]),
        ],
    ),
    (
        "electronic city",
        &[
            ("silk board", &["500K", "501K", "V-500K"]),
            ("hebbal", &["501D", "600", "501"]),
            ("whitefield", &["500M", "501", "V-500"]),
            ("majestic", &["356CW", "501D", "600"]),
            ("mg road", &["500K", "V-500K", "501D"]),
            ("jayanagar", &["500K", "501D", "356"]),
            ("btm layout", &["500K", "501K", "356"]),
            ("jp nagar", &["500K", "501D", "356"]),
        ],
    ),
    (
        "jayanagar",
        &[
            ("mg road", &["500D", "210E", "210F"]),
            ("majestic", &["500C", "15", "16"]),
            ("silk board", &["500D", "V-500D", "342D"]),
            ("electronic city", &["500K", "501D", "356"]),
            ("btm layout", &["210", "220", "221"]),
            ("jp nagar", &["15A", "15C", "15D"]),
        ],
    ),
    (
        "indiranagar",
        &[
            ("mg road", &["201B", "505F", "301K"]),
            ("majestic", &["201", "304", "305"]),
            ("whitefield", &["401K", "500F", "ITPL-2"]),
            ("airport", &["KIAS-9", "KIAS-8", "KIAS-10"]),
            ("koramangala", &["201G", "201", "342"]),
        ],
    ),
    (
        "btm layout",
        &[
            ("silk board", &["201", "500D", "V-500D"]),
            ("electronic city", &["500K", "501K", "356"]),
            ("mg road", &["500D", "501C", "301K"]),
            ("majestic", &["500D", "500C", "600"]),
            ("jayanagar", &["210", "220", "221"]),
            ("jp nagar", &["201", "210A", "G-8"]),
            ("koramangala", &["201", "201G", "221C"]),
        ],
    ),
    (
        "koramangala",
        &[
            ("silk board", &["201", "500D", "V-500D"]),
            ("electronic city", &["500K", "501K", "356"]),
            ("mg road", &["201G", "500D", "V-500D"]),
            ("majestic", &["171", "201", "213"]),
            ("indiranagar", &["201G", "201", "342"]),
            ("btm layout", &["201", "201G", "221C"]),
            ("hsr layout", &["500K", "V-500K", "171C"]),
        ],
    ),
    (
        "jp nagar",
        &[
            ("mg road", &["500D", "501L", "304"]),
            ("majestic", &["500D", "501L", "304"]),
            ("silk board", &["201", "500D", "501D"]),
            ("electronic city", &["500K", "501D", "356"]),
            ("jayanagar", &["15A", "15C", "15D"]),
            ("btm layout", &["201", "210A", "G-8"]),
        ],
    ),
    (
        "marathahalli",
        &[
            ("whitefield", &["500L", "ITPL-1", "ITPL-3"]),
            ("majestic", &["304", "305", "306"]),
            ("indiranagar", &["500F", "ITPL-4", "ITPL-5"]),
            ("koramangala", &["500M", "V-500", "V-500K"]),
        ],
    ),
    (
        "hsr layout",
        &[
            ("silk board", &["V-500K", "V-500", "V-501"]),
            ("electronic city", &["V-500K", "V-501", "356"]),
            ("btm layout", &["201", "221", "G-8"]),
            ("koramangala", &["500K", "V-500K", "171C"]),
        ],
    ),
    (
        "yeshwanthpur",
        &[
            ("majestic", &["249", "252E", "252F"]),
            ("hebbal", &["401M", "G-2", "G-3"]),
            ("malleswaram", &["61", "62", "252"]),
            ("rajajinagar", &["80", "81", "82"]),
        ],
    ),
    (
        "basavanagudi",
        &[
            ("majestic", &["15", "16", "17"]),
            ("jayanagar", &["37", "38", "40"]),
            ("shivajinagar", &["210", "211", "212"]),
            ("jp nagar", &["15A", "16A", "17A"]),
        ],
    ),
    (
        "malleswaram",
        &[
            ("majestic", &["80", "81", "82"]),
            ("yeshwanthpur", &["61", "62", "252"]),
            ("rajajinagar", &["91", "92", "93"]),
            ("shivajinagar", &["94", "95", "96"]),
        ],
    ),
];

const BANGALORE_STOP_BUSES: StopRows = &[
    ("mg road", &["500D", "500C", "401K", "201", "330E", "500A"]),
    ("majestic", &["500C", "401K", "330E", "500A", "201", "500K"]),
    ("silk board", &["500D", "335E", "335P", "201A", "500K"]),
    ("hebbal", &["500D", "500C", "500A", "500K"]),
    ("whitefield", &["401K", "500P", "335E", "G4"]),
    ("electronic city", &["335E", "335P", "500D", "500K"]),
    ("jayanagar", &["201", "201A", "500C", "500K"]),
    ("indiranagar", &["401K", "500P", "G4", "201"]),
    ("marathahalli", &["401K", "500P", "G4", "330E"]),
    ("btm layout", &["335E", "335P", "201A", "500D"]),
    ("koramangala", &["335E", "201A", "500P", "G4"]),
    ("hsr layout", &["335E", "335P", "201A"]),
    ("jp nagar", &["201", "201A", "500C"]),
    ("banashankari", &["500C", "201", "201A"]),
    ("yelahanka", &["500A", "500K", "KIA"]),
];

fn to_owned_list(buses: &[&str]) -> Vec<String> {
    buses.iter().map(|b| (*b).to_string()).collect()
}

fn push_unique(into: &mut Vec<String>, buses: &[String]) {
    for bus in buses {
        if !into.contains(bus) {
            into.push(bus.clone());
        }
    }
}

/// Buses listed per (origin, destination) pair.
///
/// Entries are hand-authored and not symmetric: an A→B row does not imply a
/// B→A row, and the two may list different buses.
#[derive(Debug, Clone, Default)]
pub struct PairTable {
    rows: HashMap<String, Vec<(String, Vec<String>)>>,
}

impl PairTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the bus list for an origin/destination pair.
    pub fn insert(&mut self, from: &str, to: &str, buses: Vec<String>) {
        let row = self.rows.entry(from.to_lowercase()).or_default();
        let to = to.to_lowercase();
        match row.iter_mut().find(|(dest, _)| *dest == to) {
            Some((_, existing)) => *existing = buses,
            None => row.push((to, buses)),
        }
    }

    /// Buses listed for exactly this direction.
    pub fn get(&self, from: &str, to: &str) -> Option<&[String]> {
        self.rows
            .get(from)?
            .iter()
            .find(|(dest, _)| dest == to)
            .map(|(_, buses)| buses.as_slice())
    }

    /// Every bus listed under `place` as an origin, in table order.
    pub fn buses_from(&self, place: &str) -> Vec<String> {
        let mut buses = Vec::new();
        if let Some(row) = self.rows.get(place) {
            for (_, listed) in row {
                push_unique(&mut buses, listed);
            }
        }
        buses
    }
}

/// Buses calling at each stop.
#[derive(Debug, Clone, Default)]
pub struct StopTable {
    stops: HashMap<String, Vec<String>>,
}

impl StopTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stop: &str, buses: Vec<String>) {
        self.stops.insert(stop.to_lowercase(), buses);
    }

    pub fn get(&self, stop: &str) -> Option<&[String]> {
        self.stops.get(stop).map(Vec::as_slice)
    }

    /// Buses calling at both stops, in the destination's listing order.
    pub fn shared(&self, from: &str, to: &str) -> Vec<String> {
        let (Some(from_buses), Some(to_buses)) = (self.get(from), self.get(to)) else {
            return Vec::new();
        };
        to_buses
            .iter()
            .filter(|bus| from_buses.contains(bus))
            .cloned()
            .collect()
    }
}

/// The adjacency data the local resolver routes over.
#[derive(Debug, Clone)]
pub enum AdjacencyTable {
    Pairs(PairTable),
    Stops(StopTable),
}

impl AdjacencyTable {
    /// Pair-keyed Bangalore table.
    pub fn bangalore_pairs() -> Self {
        let mut table = PairTable::new();
        for (from, row) in BANGALORE_PAIRS {
            for (to, buses) in *row {
                table.insert(from, to, to_owned_list(buses));
            }
        }
        AdjacencyTable::Pairs(table)
    }

    /// Per-stop Bangalore table.
    pub fn bangalore_stops() -> Self {
        let mut table = StopTable::new();
        for (stop, buses) in BANGALORE_STOP_BUSES {
            table.insert(stop, to_owned_list(buses));
        }
        AdjacencyTable::Stops(table)
    }

    /// Buses connecting the two places without a change.
    ///
    /// For a pair table the forward row wins; the reverse row is used only
    /// when no forward row exists. The reverse row's stop order is not
    /// corrected, so callers must not assume it runs from `from` to `to`.
    pub fn direct(&self, from: &PlaceName, to: &PlaceName) -> Vec<String> {
        match self {
            AdjacencyTable::Pairs(pairs) => pairs
                .get(from.key(), to.key())
                .filter(|buses| !buses.is_empty())
                .or_else(|| pairs.get(to.key(), from.key()))
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
            AdjacencyTable::Stops(stops) => stops.shared(from.key(), to.key()),
        }
    }

    /// The set of buses reachable at a place, used for hub matching.
    pub fn buses_at(&self, place: &str) -> Vec<String> {
        match self {
            AdjacencyTable::Pairs(pairs) => pairs.buses_from(place),
            AdjacencyTable::Stops(stops) => {
                stops.get(place).map(<[String]>::to_vec).unwrap_or_default()
            }
        }
    }

    /// Buses that a hub connection must not add.
    ///
    /// A per-stop table excludes the origin's own buses whenever both stops
    /// are listed; a pair table excludes nothing.
    pub fn hub_exclusions(&self, from: &PlaceName, to: &PlaceName) -> Vec<String> {
        match self {
            AdjacencyTable::Pairs(_) => Vec::new(),
            AdjacencyTable::Stops(stops) => match (stops.get(from.key()), stops.get(to.key())) {
                (Some(from_buses), Some(_)) => from_buses.to_vec(),
                _ => Vec::new(),
            },
        }
    }
}
