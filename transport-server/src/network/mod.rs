//! The BMTC local network.
//!
//! Everything here is static data loaded once at startup and never mutated:
//! the set of stops that count as "local", the adjacency tables that say
//! which buses connect two stops, and the per-route stop templates.

mod places;
mod resolver;
mod tables;
mod templates;

pub use places::LocalNetwork;
pub use resolver::{LocalRouteResolver, StopDetail};
pub use tables::{AdjacencyTable, PairTable, StopTable};
pub use templates::RouteTemplates;
