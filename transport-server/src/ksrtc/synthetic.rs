//! Synthesized intercity timetables.
//!
//! When the live endpoint gives nothing usable we still answer with a
//! plausible timetable. Its shape is fixed (which departures exist, their
//! times, classes and fares) and derived from per-route characteristics;
//! only seat availability is random.

use std::collections::HashMap;

use rand::Rng;

use crate::domain::{ClockTime, IntercityService, PlaceName, format_fare};

use super::types::IntercityQuery;

/// Characteristics of an intercity corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteProfile {
    /// How many services to list at most
    pub num_services: usize,
    pub has_local_buses: bool,
    pub has_ac: bool,
    pub has_sleeper: bool,
    pub min_fare: u32,
    pub max_fare: u32,
    /// Shortest journey time in minutes
    pub min_time: u32,
    /// Longest journey time in minutes
    pub max_time: u32,
}

impl Default for RouteProfile {
    fn default() -> Self {
        Self {
            num_services: 3,
            has_local_buses: false,
            has_ac: true,
            has_sleeper: true,
            min_fare: 300,
            max_fare: 900,
            min_time: 240,
            max_time: 420,
        }
    }
}

const fn profile(
    num_services: usize,
    has_local_buses: bool,
    has_sleeper: bool,
    fares: (u32, u32),
    times: (u32, u32),
) -> RouteProfile {
    RouteProfile {
        num_services,
        has_local_buses,
        has_ac: true,
        has_sleeper,
        min_fare: fares.0,
        max_fare: fares.1,
        min_time: times.0,
        max_time: times.1,
    }
}

const BENGALURU_MYSURU: RouteProfile = profile(8, true, true, (120, 950), (180, 300));
const BENGALURU_MANGALURU: RouteProfile = profile(5, false, true, (450, 1200), (420, 540));
const BENGALURU_HUBBALLI: RouteProfile = profile(4, true, true, (280, 950), (360, 480));

const POPULAR_ROUTES: &[(&str, &str, RouteProfile)] = &[
    ("bengaluru", "mysuru", BENGALURU_MYSURU),
    ("bengaluru", "mangaluru", BENGALURU_MANGALURU),
    ("bengaluru", "hubballi", BENGALURU_HUBBALLI),
    ("mysuru", "bengaluru", BENGALURU_MYSURU),
    ("mysuru", "mangaluru", profile(3, false, true, (550, 1250), (480, 600))),
    ("hubballi", "bengaluru", BENGALURU_HUBBALLI),
    ("hubballi", "belagavi", profile(6, true, false, (110, 480), (120, 180))),
    ("mangaluru", "bengaluru", BENGALURU_MANGALURU),
    ("mangaluru", "udupi", profile(12, true, false, (80, 320), (60, 120))),
];

/// Known corridor profiles keyed by lowercased (origin, destination).
#[derive(Debug, Clone, Default)]
pub struct RouteProfiles {
    routes: HashMap<(String, String), RouteProfile>,
    default: RouteProfile,
}

impl RouteProfiles {
    /// Profiles for the popular Karnataka corridors.
    pub fn karnataka() -> Self {
        let routes = POPULAR_ROUTES
            .iter()
            .map(|(from, to, p)| (((*from).to_string(), (*to).to_string()), *p))
            .collect();
        Self {
            routes,
            default: RouteProfile::default(),
        }
    }

    pub fn insert(&mut self, from: &str, to: &str, profile: RouteProfile) {
        self.routes
            .insert((from.to_lowercase(), to.to_lowercase()), profile);
    }

    /// The profile for a corridor, or the default profile.
    pub fn get(&self, from: &PlaceName, to: &PlaceName) -> RouteProfile {
        self.routes
            .get(&(from.key().to_string(), to.key().to_string()))
            .copied()
            .unwrap_or(self.default)
    }
}

/// One departure slot in the synthetic timetable.
struct Slot {
    suffix: &'static str,
    departure: &'static str,
    bus_type: &'static str,
    rating: Option<&'static str>,
    duration: u32,
    fare: u32,
    seat_base: i64,
    seat_band: i64,
}

/// Builds synthetic timetables from corridor profiles.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    profiles: RouteProfiles,
}

impl SyntheticGenerator {
    pub fn new(profiles: RouteProfiles) -> Self {
        Self { profiles }
    }

    /// Generate the timetable for a query.
    ///
    /// Candidates are built in a fixed order (two Volvo AC runs, an express,
    /// an overnight sleeper, then three local runs), skipping classes the
    /// corridor lacks, and the list is cut to the corridor's service count.
    pub fn generate<R: Rng>(
        &self,
        query: &IntercityQuery,
        rng: &mut R,
    ) -> Vec<IntercityService> {
        let p = self.profiles.get(&query.from, &query.to);
        let mut slots = Vec::with_capacity(7);

        if p.has_ac {
            let ac_fare = p.max_fare.max(800);
            slots.push(Slot {
                suffix: "VOLVO AC",
                departure: "08:30",
                bus_type: "Volvo AC",
                rating: Some("4.5"),
                duration: p.min_time,
                fare: ac_fare,
                seat_base: 15,
                seat_band: 15,
            });
            slots.push(Slot {
                suffix: "VOLVO AC",
                departure: "18:30",
                bus_type: "Volvo AC",
                rating: Some("4.3"),
                duration: p.min_time,
                fare: ac_fare - 50,
                seat_base: 8,
                seat_band: 20,
            });
        }

        slots.push(Slot {
            suffix: "EXPRESS",
            departure: "10:00",
            bus_type: "Express Non-AC",
            rating: None,
            duration: (p.min_time + p.max_time) / 2,
            fare: ((p.min_fare + p.max_fare) / 2).min(600),
            seat_base: 12,
            seat_band: 15,
        });

        if p.has_sleeper {
            slots.push(Slot {
                suffix: "SLEEPER",
                departure: "21:30",
                bus_type: "Sleeper AC",
                rating: Some("4.2"),
                duration: p.max_time,
                fare: (p.max_fare + 50).max(900),
                seat_base: 8,
                seat_band: 10,
            });
        }

        if p.has_local_buses {
            let local = |suffix: &'static str,
                         departure: &'static str,
                         bus_type: &'static str,
                         fare: u32,
                         seat_base: i64,
                         seat_band: i64| Slot {
                suffix,
                departure,
                bus_type,
                rating: None,
                duration: p.max_time,
                fare,
                seat_base,
                seat_band,
            };
            slots.push(local("SARIGE", "07:15", "Sarige", p.min_fare + 5, 30, 8));
            slots.push(local("ORDINARY", "09:30", "Ordinary", p.min_fare, 35, 6));
            slots.push(local("GRAMANTARA", "14:45", "Gramantara", p.min_fare + 10, 28, 10));
        }

        slots.truncate(p.num_services);

        let from = query.from.to_upper();
        let to = query.to.to_upper();

        slots
            .into_iter()
            .map(|slot| {
                let arrival = ClockTime::parse_hhmm(slot.departure)
                    .map(|dep| dep.add_minutes(slot.duration).to_string())
                    .unwrap_or_default();
                IntercityService {
                    service_name: format!("{from} - {to} {}", slot.suffix),
                    departure_time: slot.departure.to_string(),
                    arrival_time: arrival,
                    available_seats: slot.seat_base + rng.gen_range(0..slot.seat_band),
                    fare: format_fare(slot.fare),
                    bus_type: slot.bus_type.to_string(),
                    rating: slot.rating.map(str::to_string),
                }
            })
            .collect()
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new(RouteProfiles::karnataka())
    }
}
