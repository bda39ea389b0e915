//! Entity descriptors and their statements.
//!
//! Each entity declares its table, key, filter set and column map once by
//! implementing [`Entity`]. The statement builders in this module are
//! generic over that descriptor, so every entity shares the same
//! filter and partial-update logic.
//!
//! ```
//! use serde_json::json;
//! use jobly_persistence::entities::{self, Job};
//!
//! let fields = json!({"title": "Engineer", "salary": 120000})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let stmt = entities::update::<Job>(7i64, &fields).unwrap();
//! assert!(stmt.sql.contains(r#"SET "title"=$1, "salary"=$2"#));
//! assert!(stmt.sql.contains("WHERE id = $3"));
//! assert_eq!(stmt.params.len(), 3);
//! ```

mod company;
mod job;
mod user;

pub use company::{Company, NewCompany};
pub use job::{Job, NewJob};
pub use user::User;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::error::ValidationResult;
use crate::sql::{
    ColumnMap, FilterCriteria, FilterResolver, FilterSet, ParamList, SqlParam, Statement,
    UpdateFields, sql_for_partial_update,
};

/// Static description of a persisted entity.
pub trait Entity {
    /// Singular name used in errors and logs.
    const NAME: &'static str;
    /// Storage table.
    const TABLE: &'static str;
    /// Column identifying a single row.
    const KEY_COLUMN: &'static str;
    /// SELECT list, with aliases mapping storage columns to external names.
    const SELECT: &'static str;
    /// ORDER BY expression for list queries.
    const ORDER_BY: &'static str;
    /// Recognized filter keys.
    const FILTERS: FilterSet;
    /// External field name to storage column mapping for updates.
    const COLUMNS: ColumnMap<'static>;
}

/// Lists every row.
pub fn find_all<E: Entity>() -> Statement {
    Statement::unbound(format!(
        "SELECT {} FROM {} ORDER BY {}",
        E::SELECT,
        E::TABLE,
        E::ORDER_BY
    ))
}

/// Lists rows matching the filter criteria.
pub fn filter<E: Entity>(
    criteria: &FilterCriteria,
    config: ResolverConfig,
) -> ValidationResult<Statement> {
    let (clause, params) = FilterResolver::with_config(&E::FILTERS, config)
        .resolve(criteria)?
        .into_parts();

    Ok(Statement::new(
        format!(
            "SELECT {} FROM {} WHERE {} ORDER BY {}",
            E::SELECT,
            E::TABLE,
            clause,
            E::ORDER_BY
        ),
        params,
    ))
}

/// Fetches one row by key.
pub fn get<E: Entity>(key: impl Into<SqlParam>) -> Statement {
    let mut params = ParamList::new();
    let key = params.push(key);
    Statement::new(
        format!(
            "SELECT {} FROM {} WHERE {} = {}",
            E::SELECT,
            E::TABLE,
            E::KEY_COLUMN,
            key
        ),
        params,
    )
}

/// Partially updates one row, returning the updated row.
///
/// The key is bound after the SET values, so it always takes the
/// placeholder following the last assignment.
pub fn update<E: Entity>(
    key: impl Into<SqlParam>,
    fields: &UpdateFields,
) -> ValidationResult<Statement> {
    let (set_cols, mut params) = sql_for_partial_update(fields, &E::COLUMNS)?.into_parts();
    let key = params.push(key);

    debug!(entity = E::NAME, key_index = key.index(), "built update statement");

    Ok(Statement::new(
        format!(
            "UPDATE {} SET {} WHERE {} = {} RETURNING {}",
            E::TABLE,
            set_cols,
            E::KEY_COLUMN,
            key,
            E::SELECT
        ),
        params,
    ))
}

/// Deletes one row, returning its key.
pub fn remove<E: Entity>(key: impl Into<SqlParam>) -> Statement {
    let mut params = ParamList::new();
    let key = params.push(key);
    Statement::new(
        format!(
            "DELETE FROM {} WHERE {} = {} RETURNING {}",
            E::TABLE,
            E::KEY_COLUMN,
            key,
            E::KEY_COLUMN
        ),
        params,
    )
}
