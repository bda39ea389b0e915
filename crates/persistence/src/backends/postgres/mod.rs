//! PostgreSQL executor.
//!
//! Runs [`Statement`](crate::sql::Statement)s built by the clause builders
//! over a deadpool-postgres connection pool. Clause builders bind filter
//! values as text; before execution each value is coerced to the parameter
//! type the server inferred for its placeholder, so `num_employees >= $1`
//! binds `"3"` as an `int4`.
//!
//! # Example
//!
//! ```no_run
//! use jobly_persistence::backends::postgres::{PostgresBackend, PostgresConfig};
//! use jobly_persistence::config::ResolverConfig;
//! use jobly_persistence::entities::{self, Company};
//! use jobly_persistence::sql::FilterCriteria;
//!
//! # async fn main_example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = PostgresBackend::new(PostgresConfig::default()).await?;
//!
//! let criteria = FilterCriteria::from([("minEmployees".to_string(), "10".to_string())]);
//! let stmt = entities::filter::<Company>(&criteria, ResolverConfig::default())?;
//! let rows = backend.query(&stmt).await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod params;
mod schema;

pub use backend::{PostgresBackend, PostgresConfig, PostgresSslMode};
