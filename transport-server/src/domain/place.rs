//! Location names.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A free-text location name as typed by the user.
///
/// Names compare case-insensitively and nothing else: `"MG Road"` equals
/// `"mg road"`, but `"Mg  Road"` (two spaces) is a different place. The
/// original spelling is kept for echoing back in responses.
///
/// # Examples
///
/// ```
/// use transport_server::domain::PlaceName;
///
/// let a = PlaceName::new("MG Road");
/// assert_eq!(a, PlaceName::new("mg road"));
/// assert_ne!(a, PlaceName::new("Mg  Road"));
/// assert_eq!(a.as_str(), "MG Road");
/// assert_eq!(a.key(), "mg road");
/// ```
#[derive(Clone)]
pub struct PlaceName {
    raw: String,
    key: String,
}

impl PlaceName {
    /// Create a place name from user input.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = raw.to_lowercase();
        Self { raw, key }
    }

    /// The name exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The lowercased lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The name in upper case, as used in intercity service names.
    pub fn to_upper(&self) -> String {
        self.raw.to_uppercase()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl PartialEq for PlaceName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PlaceName {}

impl Hash for PlaceName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceName({:?})", self.raw)
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for PlaceName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
