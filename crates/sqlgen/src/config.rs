//! Command line configuration for the statement generator.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `JOBLY_LOG_LEVEL` | warn | Log level |
//! | `JOBLY_UNKNOWN_FILTERS` | reject | Unknown filter key handling (reject, ignore) |

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};
use jobly_persistence::config::{ResolverConfig, UnknownKeyPolicy};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Statement generator configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "jobly-sqlgen")]
#[command(about = "Render Jobly filter and update statements as JSON")]
pub struct CliConfig {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "JOBLY_LOG_LEVEL", default_value = "warn", global = true)]
    pub log_level: String,

    /// Handling of filter keys the entity does not recognize.
    #[arg(long, env = "JOBLY_UNKNOWN_FILTERS", default_value = "reject", global = true)]
    pub unknown_filters: UnknownKeyPolicy,

    /// Statement to render.
    #[command(subcommand)]
    pub command: Command,
}

/// A statement to render.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Filtered list query, from `key=value` criteria.
    Filter {
        /// Entity to query.
        entity: EntityKind,

        /// Filter criteria as `key=value` pairs.
        #[arg(value_parser = parse_criterion)]
        criteria: Vec<(String, String)>,
    },

    /// Partial update of one row.
    Update {
        /// Entity to update.
        entity: EntityKind,

        /// Key of the row to update.
        id: String,

        /// Fields to set, as a JSON object.
        fields: String,
    },
}

/// Entities the generator can render statements for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    /// Companies, keyed by handle.
    Company,
    /// Jobs, keyed by integer id.
    Job,
    /// Users, keyed by username.
    User,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Company => write!(f, "company"),
            EntityKind::Job => write!(f, "job"),
            EntityKind::User => write!(f, "user"),
        }
    }
}

fn parse_criterion(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("invalid criterion '{}', expected key=value", s))
}

impl CliConfig {
    /// Resolver settings derived from the command line.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::with_unknown_keys(self.unknown_filters)
    }

    /// Validates the configuration and returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Log level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if let Command::Update { id, .. } = &self.command {
            if id.trim().is_empty() {
                errors.push("Update id cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
