//! BMTC route lookup.
//!
//! Route details come from a community-run HTTP service when it is reachable
//! and from the static templates otherwise.

mod client;
mod directory;
mod error;

pub use client::{BmtcClient, BmtcConfig, DEFAULT_BASE_URL};
pub use directory::RouteDirectory;
pub use error::BmtcError;
