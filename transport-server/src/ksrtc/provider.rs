//! Live-first intercity lookup with synthetic fallback.

use std::future::Future;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::domain::IntercityService;

use super::client::KsrtcClient;
use super::error::KsrtcError;
use super::synthetic::SyntheticGenerator;
use super::types::IntercityQuery;

/// A source of live intercity listings.
pub trait ServiceSource: Send + Sync {
    fn fetch(
        &self,
        query: &IntercityQuery,
    ) -> impl Future<Output = Result<Vec<IntercityService>, KsrtcError>> + Send;
}

impl ServiceSource for KsrtcClient {
    async fn fetch(&self, query: &IntercityQuery) -> Result<Vec<IntercityService>, KsrtcError> {
        self.fetch_services(query).await
    }
}

/// Where a set of listings came from. Kept for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Live,
    Synthetic,
}

/// How synthetic seat counts are randomised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatSeed {
    /// Fresh OS entropy on every request
    #[default]
    Entropy,
    /// The same seed on every request, for reproducible output
    Fixed(u64),
}

impl SeatSeed {
    pub fn rng(self) -> StdRng {
        match self {
            SeatSeed::Entropy => StdRng::from_entropy(),
            SeatSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Listings for one query.
#[derive(Debug, Clone)]
pub struct IntercityResult {
    pub services: Vec<IntercityService>,
    pub provenance: Provenance,
}

/// Tries the live source once, then falls back to the synthetic generator.
///
/// Failures are logged and never returned: callers always get listings.
#[derive(Debug, Clone)]
pub struct IntercityProvider<S> {
    live: Option<S>,
    generator: SyntheticGenerator,
    fallback_on_empty: bool,
    seats: SeatSeed,
}

impl<S: ServiceSource> IntercityProvider<S> {
    /// Create a provider. With `live` set to `None` only synthetic listings
    /// are produced.
    pub fn new(live: Option<S>, generator: SyntheticGenerator) -> Self {
        Self {
            live,
            generator,
            fallback_on_empty: false,
            seats: SeatSeed::Entropy,
        }
    }

    /// Treat a successful live answer with zero services as a failure.
    pub fn with_fallback_on_empty(mut self, fallback_on_empty: bool) -> Self {
        self.fallback_on_empty = fallback_on_empty;
        self
    }

    pub fn with_seat_seed(mut self, seats: SeatSeed) -> Self {
        self.seats = seats;
        self
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub async fn search(&self, query: &IntercityQuery) -> IntercityResult {
        if let Some(live) = &self.live {
            match live.fetch(query).await {
                Ok(services) if !services.is_empty() || !self.fallback_on_empty => {
                    let count = services.len();
                    info!(from = %query.from, to = %query.to, count, "live KSRTC listings");
                    return IntercityResult {
                        services,
                        provenance: Provenance::Live,
                    };
                }
                Ok(_) => {
                    warn!(
                        from = %query.from,
                        to = %query.to,
                        "KSRTC returned no services, using synthetic timetable"
                    );
                }
                Err(e) => {
                    warn!(
                        from = %query.from,
                        to = %query.to,
                        error = %e,
                        "KSRTC lookup failed, using synthetic timetable"
                    );
                }
            }
        }

        let mut rng = self.seats.rng();
        IntercityResult {
            services: self.generator.generate(query, &mut rng),
            provenance: Provenance::Synthetic,
        }
    }
}
