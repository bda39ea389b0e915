//! Partial update SET-clause builder.
//!
//! A partial update changes only the fields a request supplies. The
//! request arrives keyed by external (camelCase) names; a per-entity
//! [`ColumnMap`] translates those to storage columns.
//!
//! ```
//! use serde_json::json;
//! use jobly_persistence::sql::{ColumnMap, SqlParam, UpdateFields, sql_for_partial_update};
//!
//! const COLUMNS: ColumnMap = ColumnMap::new(&[("firstName", "first_name")]);
//!
//! let fields: UpdateFields = json!({"firstName": "Aliya", "age": 32})
//!     .as_object()
//!     .cloned()
//!     .unwrap();
//!
//! let result = sql_for_partial_update(&fields, &COLUMNS).unwrap();
//! assert_eq!(result.clause, r#""first_name"=$1, "age"=$2"#);
//! assert_eq!(result.values, vec![SqlParam::text("Aliya"), SqlParam::Integer(32)]);
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use super::params::{ClauseResult, ParamList, quote_ident};
use crate::error::{ValidationError, ValidationResult};

/// Fields to update, keyed by external name, in request order.
pub type UpdateFields = Map<String, Value>;

/// Static mapping from external field names to storage column names.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap<'a> {
    entries: &'a [(&'a str, &'a str)],
}

impl<'a> ColumnMap<'a> {
    /// Creates a map from `(external, column)` pairs.
    pub const fn new(entries: &'a [(&'a str, &'a str)]) -> Self {
        Self { entries }
    }

    /// A map that passes every key through unchanged.
    pub const fn identity() -> Self {
        Self { entries: &[] }
    }

    /// Storage column for an external key; unmapped keys pass through.
    pub fn column_for<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.entries
            .iter()
            .find(|(external, _)| *external == key)
            .map_or(key, |(_, column)| *column)
    }
}

/// Builds the SET-clause fragment for a partial update.
///
/// Assignments follow the iteration order of `fields`; the Nth key binds
/// to `$N`. Callers binding further values (such as the row key for the
/// WHERE clause) continue from `values.len() + 1`.
///
/// # Errors
///
/// [`ValidationError::EmptyUpdate`] if `fields` is empty.
pub fn sql_for_partial_update(
    fields: &UpdateFields,
    columns: &ColumnMap<'_>,
) -> ValidationResult<ClauseResult> {
    if fields.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }

    let mut params = ParamList::new();
    let assignments: Vec<String> = fields
        .iter()
        .map(|(key, value)| {
            let column = quote_ident(columns.column_for(key));
            format!("{}={}", column, params.push(value))
        })
        .collect();

    debug!(
        assignments = assignments.len(),
        params = params.len(),
        "built partial update"
    );

    Ok(ClauseResult::new(assignments.join(", "), params))
}
