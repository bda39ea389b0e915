//! Configuration for the clause builders.
//!
//! ```
//! use jobly_persistence::config::{ResolverConfig, UnknownKeyPolicy};
//!
//! let config: ResolverConfig = serde_json::from_str(r#"{"unknown_keys": "ignore"}"#).unwrap();
//! assert_eq!(config.unknown_keys, UnknownKeyPolicy::Ignore);
//!
//! // Unknown filter keys are rejected unless configured otherwise.
//! assert_eq!(ResolverConfig::default().unknown_keys, UnknownKeyPolicy::Reject);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What the filter resolver does with keys outside the entity's filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Fail the whole request with a validation error.
    #[default]
    Reject,
    /// Drop the key and log a warning.
    Ignore,
}

impl fmt::Display for UnknownKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownKeyPolicy::Reject => write!(f, "reject"),
            UnknownKeyPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

impl FromStr for UnknownKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(UnknownKeyPolicy::Reject),
            "ignore" => Ok(UnknownKeyPolicy::Ignore),
            other => Err(format!(
                "invalid unknown-key policy '{}', expected 'reject' or 'ignore'",
                other
            )),
        }
    }
}

/// Filter resolver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResolverConfig {
    /// Handling of unrecognized filter keys.
    #[serde(default)]
    pub unknown_keys: UnknownKeyPolicy,
}

impl ResolverConfig {
    /// Creates a config with the given unknown-key policy.
    pub fn with_unknown_keys(unknown_keys: UnknownKeyPolicy) -> Self {
        Self { unknown_keys }
    }
}
