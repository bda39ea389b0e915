//! Jobly Persistence Layer
//!
//! Parameter-safe SQL building for the Jobly job board. The heart of the
//! crate is two clause builders that turn sparse request input into SQL
//! fragments with correctly numbered `$N` placeholders:
//!
//! - the **filter resolver** turns optional query-string criteria into a
//!   WHERE-clause fragment
//! - the **partial update builder** turns a field-update map into a
//!   SET-clause fragment, translating external field names to columns
//!
//! Neither builder touches a database. Callers splice the returned clause
//! into a literal SQL template, bind the returned values, and append any
//! parameters of their own (such as a row key) after them.
//!
//! # Features
//!
//! - `postgres` - pooled tokio-postgres executor for built statements
//!
//! # Architecture
//!
//! - [`sql`] - clause builders, positional parameters, statements
//! - [`entities`] - per-entity filter sets, column maps and statements
//! - [`config`] - resolver configuration
//! - [`error`] - error types for all operations
//! - [`backends`] - statement executors
//!
//! # Quick Start
//!
//! ```
//! use jobly_persistence::config::ResolverConfig;
//! use jobly_persistence::entities::{self, Company};
//! use jobly_persistence::sql::{FilterCriteria, SqlParam};
//!
//! let criteria = FilterCriteria::from([
//!     ("minEmployees".to_string(), "3".to_string()),
//!     ("maxEmployees".to_string(), "9".to_string()),
//! ]);
//!
//! let stmt = entities::filter::<Company>(&criteria, ResolverConfig::default()).unwrap();
//! assert!(stmt.sql.contains("WHERE num_employees >= $1 AND num_employees <= $2"));
//! assert_eq!(stmt.params, vec![SqlParam::text("3"), SqlParam::text("9")]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod config;
pub mod entities;
pub mod error;
pub mod sql;

// Re-export commonly used types at crate root
pub use config::{ResolverConfig, UnknownKeyPolicy};
pub use error::{StorageError, StorageResult, ValidationError, ValidationResult};
pub use sql::{ClauseResult, FilterCriteria, SqlParam, Statement, UpdateFields};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
