use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolution engine settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Deadline for a single query round trip, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Total attempts for a whole record set, first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Backoff unit; attempt `n` is followed by a sleep of `n` units.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// How many times A/AAAA queries are repeated to collect rotating answers.
    #[serde(default = "default_load_balance_probes")]
    pub load_balance_probes: usize,

    #[serde(default = "default_max_delegation_hops")]
    pub max_delegation_hops: usize,

    /// Accept non-authoritative responses unless they are plain referrals.
    #[serde(default)]
    pub accept_recursive_answers: bool,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn backoff_unit(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            load_balance_probes: default_load_balance_probes(),
            max_delegation_hops: default_max_delegation_hops(),
            accept_recursive_answers: false,
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    1000
}

fn default_load_balance_probes() -> usize {
    10
}

fn default_max_delegation_hops() -> usize {
    10
}
