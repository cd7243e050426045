//! HTTP JSON API.
//!
//! All endpoints live under `/api/transport`. Logical errors are reported in
//! the body with `success: false`; the status code is always 200.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
