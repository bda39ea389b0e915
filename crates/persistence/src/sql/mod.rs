//! Parameter-safe clause builders.
//!
//! Two builders turn sparse request input into SQL fragments with `$N`
//! placeholders:
//!
//! - [`FilterResolver`] / [`resolve_filters`]: filter criteria to a
//!   WHERE-clause fragment
//! - [`sql_for_partial_update`]: an update map to a SET-clause fragment
//!
//! Both return a [`ClauseResult`]. Neither holds state between calls, so
//! the same input always yields the same clause and numbering.

mod filter;
mod params;
mod statement;
mod update;

pub use filter::{
    FilterCriteria, FilterField, FilterKind, FilterResolver, FilterSet, resolve_filters,
};
pub use params::{ClauseResult, ParamList, Placeholder, SqlParam, quote_ident};
pub use statement::Statement;
pub use update::{ColumnMap, UpdateFields, sql_for_partial_update};
