//! KSRTC request and response types.

use serde::{Deserialize, Serialize};

use crate::domain::{IntercityService, PlaceName};

/// An intercity availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntercityQuery {
    pub from: PlaceName,
    pub to: PlaceName,
    /// Journey date as DD-MM-YYYY
    pub date: String,
}

impl IntercityQuery {
    pub fn new(from: PlaceName, to: PlaceName, date: impl Into<String>) -> Self {
        Self {
            from,
            to,
            date: date.into(),
        }
    }
}

/// Body of a successful availability response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub services: Vec<IntercityService>,
}
