//! Core domain types for bus search.
//!
//! These types carry no I/O; they are shared by the route resolver, the
//! intercity client and both front ends.

mod error;
mod fare;
mod place;
mod route;
mod service;
mod time;

pub use error::DomainError;
pub use fare::{format_fare, parse_fare_amount};
pub use place::PlaceName;
pub use route::BusRoute;
pub use service::IntercityService;
pub use time::ClockTime;
