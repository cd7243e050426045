//! Bucketing intercity listings into luxury, express and local.
//!
//! Listings carry no structured class, only free text, so buckets are chosen
//! by keyword. Two rule sets are in use: one decides "local" by the absence
//! of premium keywords plus a fare cap, the other by the presence of
//! ordinary-service keywords.

use serde::Serialize;

use crate::domain::{IntercityService, parse_fare_amount};

/// Premium keywords; any of them rules a service out of "local".
const PREMIUM_KEYWORDS: &[&str] = &["VOLVO", "AC", "EXPRESS", "SLEEPER"];

/// Fares above this are never "local" under the exclusion rule.
const LOCAL_FARE_CAP: f64 = 150.0;

/// Ordinary-service keywords; any of them makes a service "local".
const LOCAL_KEYWORDS: &[&str] = &[
    "ORDINARY", "SARIGE", "LOCAL", "REGULAR", "NON-AC", "PUSH BACK", "CITY", "TOWN",
];

/// How a service is judged to be a local bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalRule {
    /// No premium keyword and a fare of at most 150
    Exclusion,
    /// At least one ordinary-service keyword
    Inclusion,
}

/// The bucket a service falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Luxury,
    Express,
    Local,
}

/// Listings split into buckets, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Categorized {
    pub luxury_buses: Vec<IntercityService>,
    pub express_buses: Vec<IntercityService>,
    pub local_buses: Vec<IntercityService>,
}

impl Categorized {
    pub fn total(&self) -> usize {
        self.luxury_buses.len() + self.express_buses.len() + self.local_buses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Categorizer {
    rule: LocalRule,
}

impl Categorizer {
    pub fn new(rule: LocalRule) -> Self {
        Self { rule }
    }

    pub fn is_local(&self, svc: &IntercityService) -> bool {
        let name = svc.service_name.to_uppercase();
        let class = svc.bus_type.to_uppercase();
        let mentions = |kw: &&str| name.contains(kw) || class.contains(kw);

        match self.rule {
            LocalRule::Exclusion => {
                if PREMIUM_KEYWORDS.iter().any(mentions) {
                    return false;
                }
                // An unreadable fare does not disqualify.
                parse_fare_amount(&svc.fare).unwrap_or(0.0) <= LOCAL_FARE_CAP
            }
            LocalRule::Inclusion => LOCAL_KEYWORDS.iter().any(mentions),
        }
    }

    pub fn category(&self, svc: &IntercityService) -> Category {
        if self.is_local(svc) {
            Category::Local
        } else if svc.service_name.to_uppercase().contains("EXPRESS")
            || svc.bus_type.to_uppercase().contains("EXPRESS")
        {
            Category::Express
        } else {
            Category::Luxury
        }
    }

    pub fn categorize(&self, services: Vec<IntercityService>) -> Categorized {
        let mut out = Categorized::default();
        for svc in services {
            match self.category(&svc) {
                Category::Luxury => out.luxury_buses.push(svc),
                Category::Express => out.express_buses.push(svc),
                Category::Local => out.local_buses.push(svc),
            }
        }
        out
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn service()(
            name in "[A-Z -]{0,24}",
            class in prop::sample::select(vec![
                "Volvo AC",
                "Express Non-AC",
                "Sleeper AC",
                "Sarige",
                "Ordinary",
                "Gramantara",
                "City",
            ]),
            fare in 0u32..2000,
        ) -> IntercityService {
            IntercityService {
                service_name: name,
                departure_time: "10:00".into(),
                arrival_time: "12:00".into(),
                available_seats: 10,
                fare: format!("₹{fare}"),
                bus_type: class.to_string(),
                rating: None,
            }
        }
    }

    proptest! {
        /// Every service lands in exactly one bucket
        #[test]
        fn partition_is_total(services in prop::collection::vec(service(), 0..20)) {
            for rule in [LocalRule::Exclusion, LocalRule::Inclusion] {
                let out = Categorizer::new(rule).categorize(services.clone());
                prop_assert_eq!(out.total(), services.len());
            }
        }

        /// Nothing in the express bucket lacks the keyword
        #[test]
        fn express_bucket_mentions_express(services in prop::collection::vec(service(), 0..20)) {
            let out = Categorizer::new(LocalRule::Exclusion).categorize(services);
            for svc in &out.express_buses {
                let text = format!("{} {}", svc.service_name, svc.bus_type).to_uppercase();
                prop_assert!(text.contains("EXPRESS"));
            }
        }
    }
}
