//! KSRTC intercity availability.
//!
//! The live endpoint is best-effort: it is often down, slow, or answers with
//! an HTML page instead of JSON. [`IntercityProvider`] hides that from
//! callers by falling back to a synthesized timetable built from known route
//! characteristics.

mod client;
mod error;
mod provider;
mod synthetic;
mod types;

pub use client::{DEFAULT_BASE_URL, KsrtcClient, KsrtcConfig};
pub use error::KsrtcError;
pub use provider::{IntercityProvider, IntercityResult, Provenance, ServiceSource, SeatSeed};
pub use synthetic::{RouteProfile, RouteProfiles, SyntheticGenerator};
pub use types::{IntercityQuery, SearchResponse};
