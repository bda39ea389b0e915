//! Jobly statement generator.
//!
//! Renders the filter and partial update statements the persistence layer
//! builds, so they can be inspected or piped into other tooling without a
//! running database.

pub mod config;

use anyhow::Context;
use jobly_persistence::config::ResolverConfig;
use jobly_persistence::entities::{self, Company, Entity, Job, User};
use jobly_persistence::sql::{FilterCriteria, SqlParam, Statement, UpdateFields};
use tracing::debug;

pub use config::{CliConfig, Command, EntityKind};

/// Builds the statement a command describes.
pub fn render(command: &Command, config: ResolverConfig) -> anyhow::Result<Statement> {
    match command {
        Command::Filter { entity, criteria } => {
            let criteria: FilterCriteria = criteria.iter().cloned().collect();
            debug!(entity = %entity, keys = criteria.len(), "rendering filter");
            let stmt = match entity {
                EntityKind::Company => entities::filter::<Company>(&criteria, config)?,
                EntityKind::Job => entities::filter::<Job>(&criteria, config)?,
                EntityKind::User => entities::filter::<User>(&criteria, config)?,
            };
            Ok(stmt)
        }
        Command::Update { entity, id, fields } => {
            let fields: UpdateFields = serde_json::from_str(fields)
                .context("update fields must be a JSON object")?;
            debug!(entity = %entity, id = %id, fields = fields.len(), "rendering update");
            let stmt = match entity {
                EntityKind::Company => entities::update::<Company>(id.as_str(), &fields)?,
                EntityKind::Job => entities::update::<Job>(job_id(id)?, &fields)?,
                EntityKind::User => entities::update::<User>(id.as_str(), &fields)?,
            };
            Ok(stmt)
        }
    }
}

/// Job rows are keyed by an integer id.
fn job_id(id: &str) -> anyhow::Result<SqlParam> {
    let id: i64 = id
        .parse()
        .with_context(|| format!("{} id must be an integer, got '{}'", Job::NAME, id))?;
    Ok(SqlParam::Integer(id))
}

/// Initializes logging to stderr.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("jobly_sqlgen={level},jobly_persistence={level}"))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
