//! Interactive command-line front end.
//!
//! Reads origin, destination and (for intercity trips) a travel date from a
//! line-oriented reader, runs the shared search pipeline and prints the
//! results as formatted text.

mod date;
mod error;
mod prompt;
mod render;
mod session;

pub use date::{display_date, parse_travel_date};
pub use error::CliError;
pub use prompt::read_answer;
pub use render::{IntercityResultsTemplate, LocalResultsTemplate, render_intercity, render_local};
pub use session::run;
