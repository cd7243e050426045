//! Rule profiles and process settings.
//!
//! Two rule sets are in circulation for the same service and they disagree
//! on table granularity, the local-bus rule, what an empty live answer means
//! and how stop lists are presented. [`Profile`] names each set so the choice
//! is explicit at startup.

use std::fmt;
use std::str::FromStr;

use clap::Args;
use thiserror::Error;

use crate::bmtc::{BmtcConfig, BmtcError, DEFAULT_BASE_URL as DEFAULT_BMTC_URL};
use crate::categorize::LocalRule;
use crate::domain::DomainError;
use crate::ksrtc::{DEFAULT_BASE_URL as DEFAULT_KSRTC_URL, KsrtcConfig, KsrtcError, SeatSeed};
use crate::network::{AdjacencyTable, StopDetail};

/// A named rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Pair-keyed table, exclusion rule with fare cap, tailored stops.
    #[default]
    Detailed,
    /// Per-stop table, inclusion rule, template stops, empty live answers
    /// replaced by the synthetic timetable.
    Compact,
}

impl Profile {
    pub fn adjacency(self) -> AdjacencyTable {
        match self {
            Profile::Detailed => AdjacencyTable::bangalore_pairs(),
            Profile::Compact => AdjacencyTable::bangalore_stops(),
        }
    }

    pub fn local_rule(self) -> LocalRule {
        match self {
            Profile::Detailed => LocalRule::Exclusion,
            Profile::Compact => LocalRule::Inclusion,
        }
    }

    /// Whether a live answer with zero services triggers the fallback.
    pub fn fallback_on_empty(self) -> bool {
        matches!(self, Profile::Compact)
    }

    pub fn stop_detail(self) -> StopDetail {
        match self {
            Profile::Detailed => StopDetail::Tailored,
            Profile::Compact => StopDetail::Template,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Detailed => "detailed",
            Profile::Compact => "compact",
        }
    }
}

impl FromStr for Profile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detailed" => Ok(Profile::Detailed),
            "compact" => Ok(Profile::Compact),
            _ => Err(DomainError::UnknownProfile(s.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors building the search stack at startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] DomainError),

    #[error("failed to build KSRTC client: {0}")]
    Ksrtc(#[from] KsrtcError),

    #[error("failed to build BMTC client: {0}")]
    Bmtc(#[from] BmtcError),
}

/// Settings shared by the server and the CLI.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub profile: Profile,
    pub ksrtc: KsrtcConfig,
    /// `None` disables live BMTC route lookups
    pub bmtc: Option<BmtcConfig>,
    /// Overrides the profile's empty-answer behaviour when set
    pub fallback_on_empty: Option<bool>,
    pub seat_seed: SeatSeed,
    /// Skip the live KSRTC fetch entirely
    pub offline: bool,
}

impl ServerSettings {
    pub fn new() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            profile: Profile::default(),
            ksrtc: KsrtcConfig::default(),
            bmtc: Some(BmtcConfig::default()),
            fallback_on_empty: None,
            seat_seed: SeatSeed::Entropy,
            offline: false,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_ksrtc_url(mut self, url: impl Into<String>) -> Self {
        self.ksrtc = self.ksrtc.with_base_url(url);
        self
    }

    /// Timeout for both live providers.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.ksrtc = self.ksrtc.with_timeout(secs);
        self.bmtc = self.bmtc.map(|b| b.with_timeout(secs));
        self
    }

    pub fn with_bmtc_url(mut self, url: impl Into<String>) -> Self {
        let timeout = self.ksrtc.timeout_secs;
        self.bmtc = Some(BmtcConfig::new().with_base_url(url).with_timeout(timeout));
        self
    }

    pub fn without_bmtc(mut self) -> Self {
        self.bmtc = None;
        self
    }

    pub fn with_fallback_on_empty(mut self, fallback: bool) -> Self {
        self.fallback_on_empty = Some(fallback);
        self
    }

    pub fn with_seat_seed(mut self, seed: u64) -> Self {
        self.seat_seed = SeatSeed::Fixed(seed);
        self
    }

    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// The effective empty-answer behaviour.
    pub fn fallback_on_empty(&self) -> bool {
        self.fallback_on_empty
            .unwrap_or_else(|| self.profile.fallback_on_empty())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Search options shared by both binaries.
#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    /// Rule profile: "detailed" or "compact"
    #[arg(long, env = "TRANSPORT_PROFILE", default_value = "detailed")]
    pub profile: Profile,

    /// KSRTC availability endpoint
    #[arg(long, env = "KSRTC_BASE_URL", default_value = DEFAULT_KSRTC_URL)]
    pub ksrtc_url: String,

    /// Timeout for live provider calls, in seconds
    #[arg(long, env = "KSRTC_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// BMTC route provider base URL
    #[arg(long, env = "BMTC_ROUTE_URL", default_value = DEFAULT_BMTC_URL)]
    pub bmtc_url: String,

    /// Never call the BMTC route provider
    #[arg(long, env = "NO_BMTC_LIVE")]
    pub no_bmtc_live: bool,

    /// Replace empty live KSRTC answers with the synthetic timetable
    /// (defaults to the profile's choice)
    #[arg(long, env = "FALLBACK_ON_EMPTY")]
    pub fallback_on_empty: Option<bool>,

    /// Fixed seed for synthetic seat counts
    #[arg(long, env = "SEAT_SEED")]
    pub seed: Option<u64>,

    /// Skip all live provider calls
    #[arg(long, env = "OFFLINE")]
    pub offline: bool,
}

impl SearchArgs {
    pub fn settings(&self) -> ServerSettings {
        let mut settings = ServerSettings::new()
            .with_profile(self.profile)
            .with_ksrtc_url(&self.ksrtc_url)
            .with_bmtc_url(&self.bmtc_url)
            .with_timeout(self.timeout_secs)
            .with_offline(self.offline);
        if self.no_bmtc_live {
            settings = settings.without_bmtc();
        }
        if let Some(fallback) = self.fallback_on_empty {
            settings = settings.with_fallback_on_empty(fallback);
        }
        if let Some(seed) = self.seed {
            settings = settings.with_seat_seed(seed);
        }
        settings
    }
}
