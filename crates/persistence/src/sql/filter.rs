//! Filter criteria resolution.
//!
//! Turns a sparse map of query-string filters into a WHERE-clause fragment
//! with `$N` placeholders. Which keys an entity accepts, and what each one
//! compiles to, is declared once per entity as a [`FilterSet`]:
//!
//! ```
//! use std::collections::BTreeMap;
//! use jobly_persistence::sql::{FilterField, FilterSet, SqlParam, resolve_filters};
//!
//! const FILTERS: FilterSet = FilterSet::new(
//!     "company",
//!     &[
//!         FilterField::min("minEmployees", "num_employees"),
//!         FilterField::max("maxEmployees", "num_employees"),
//!         FilterField::contains("nameLike", "name"),
//!     ],
//! );
//!
//! let criteria = BTreeMap::from([
//!     ("minEmployees".to_string(), "3".to_string()),
//!     ("maxEmployees".to_string(), "9".to_string()),
//! ]);
//!
//! let result = resolve_filters(&FILTERS, &criteria).unwrap();
//! assert_eq!(result.clause, "num_employees >= $1 AND num_employees <= $2");
//! assert_eq!(result.values, vec![SqlParam::text("3"), SqlParam::text("9")]);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use super::params::{ClauseResult, ParamList};
use crate::config::{ResolverConfig, UnknownKeyPolicy};
use crate::error::{ValidationError, ValidationResult};

/// Raw filter values keyed by their external (query-string) name.
pub type FilterCriteria = BTreeMap<String, String>;

/// The predicate a filter key compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// `column >= $N`, value bound as-is.
    Min,
    /// `column <= $N`, value bound as-is.
    Max,
    /// `column ILIKE $N`, value bound as `%value%`.
    Contains,
    /// `column > 0` when the value is `"true"`, otherwise `column >= 0`.
    ///
    /// Always emitted, binds nothing.
    Flag,
}

/// One recognized filter key of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    /// External key as it appears in the request.
    pub key: &'static str,
    /// Predicate kind.
    pub kind: FilterKind,
    /// Storage column the predicate applies to.
    pub column: &'static str,
}

impl FilterField {
    /// A lower numeric bound.
    pub const fn min(key: &'static str, column: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Min,
            column,
        }
    }

    /// An upper numeric bound.
    pub const fn max(key: &'static str, column: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Max,
            column,
        }
    }

    /// A case-insensitive substring match.
    pub const fn contains(key: &'static str, column: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Contains,
            column,
        }
    }

    /// A boolean flag selecting between a strict and an inclusive predicate.
    pub const fn flag(key: &'static str, column: &'static str) -> Self {
        Self {
            key,
            kind: FilterKind::Flag,
            column,
        }
    }
}

/// The ordered filter keys an entity recognizes.
///
/// Predicates are emitted in field order, so the order here fixes both the
/// clause text and the parameter numbering.
#[derive(Debug, Clone, Copy)]
pub struct FilterSet {
    /// Entity name used in error messages and logs.
    pub entity: &'static str,
    /// Recognized fields in emission order.
    pub fields: &'static [FilterField],
}

impl FilterSet {
    /// Creates a filter set.
    pub const fn new(entity: &'static str, fields: &'static [FilterField]) -> Self {
        Self { entity, fields }
    }

    /// Looks up the field for an external key.
    pub fn field(&self, key: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Returns true if the key belongs to this set.
    pub fn recognizes(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Recognized keys in emission order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

/// Resolves [`FilterCriteria`] against a [`FilterSet`].
#[derive(Debug, Clone, Copy)]
pub struct FilterResolver<'a> {
    filters: &'a FilterSet,
    config: ResolverConfig,
}

impl<'a> FilterResolver<'a> {
    /// Creates a resolver with the default configuration.
    pub fn new(filters: &'a FilterSet) -> Self {
        Self::with_config(filters, ResolverConfig::default())
    }

    /// Creates a resolver with an explicit configuration.
    pub fn with_config(filters: &'a FilterSet, config: ResolverConfig) -> Self {
        Self { filters, config }
    }

    /// Validates the criteria and builds the WHERE-clause fragment.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::NoFilterCriteria`] if no recognized key is present
    /// - [`ValidationError::UnknownFilter`] for an unrecognized key under
    ///   [`UnknownKeyPolicy::Reject`]
    /// - [`ValidationError::InvertedRange`] if a minimum bound exceeds the
    ///   maximum bound on the same column
    pub fn resolve(&self, criteria: &FilterCriteria) -> ValidationResult<ClauseResult> {
        self.check_recognized(criteria)?;
        self.check_unknown(criteria)?;
        self.check_ranges(criteria)?;

        let mut params = ParamList::new();
        let predicates: Vec<String> = self
            .filters
            .fields
            .iter()
            .filter_map(|field| {
                let value = present(criteria, field.key);
                match field.kind {
                    FilterKind::Min => {
                        value.map(|v| format!("{} >= {}", field.column, params.push(v)))
                    }
                    FilterKind::Max => {
                        value.map(|v| format!("{} <= {}", field.column, params.push(v)))
                    }
                    FilterKind::Contains => value.map(|v| {
                        format!("{} ILIKE {}", field.column, params.push(format!("%{}%", v)))
                    }),
                    FilterKind::Flag => Some(if value == Some("true") {
                        format!("{} > 0", field.column)
                    } else {
                        format!("{} >= 0", field.column)
                    }),
                }
            })
            .collect();

        debug!(
            entity = self.filters.entity,
            predicates = predicates.len(),
            params = params.len(),
            "resolved filter criteria"
        );

        Ok(ClauseResult::new(predicates.join(" AND "), params))
    }

    fn check_recognized(&self, criteria: &FilterCriteria) -> ValidationResult<()> {
        if self.filters.keys().any(|key| present(criteria, key).is_some()) {
            return Ok(());
        }
        Err(ValidationError::NoFilterCriteria {
            entity: self.filters.entity,
            supplied: criteria.keys().cloned().collect(),
        })
    }

    fn check_unknown(&self, criteria: &FilterCriteria) -> ValidationResult<()> {
        for key in criteria.keys().filter(|k| !self.filters.recognizes(k)) {
            match self.config.unknown_keys {
                UnknownKeyPolicy::Reject => {
                    return Err(ValidationError::UnknownFilter {
                        entity: self.filters.entity,
                        key: key.clone(),
                    });
                }
                UnknownKeyPolicy::Ignore => {
                    warn!(entity = self.filters.entity, key = %key, "ignoring unrecognized filter");
                }
            }
        }
        Ok(())
    }

    fn check_ranges(&self, criteria: &FilterCriteria) -> ValidationResult<()> {
        let mins = self.filters.fields.iter().filter(|f| f.kind == FilterKind::Min);
        for min_field in mins {
            let Some(max_field) = self
                .filters
                .fields
                .iter()
                .find(|f| f.kind == FilterKind::Max && f.column == min_field.column)
            else {
                continue;
            };

            let min = present(criteria, min_field.key).and_then(parse_bound);
            let max = present(criteria, max_field.key).and_then(parse_bound);
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(ValidationError::InvertedRange {
                        min_key: min_field.key,
                        max_key: max_field.key,
                        min: min.to_string(),
                        max: max.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Resolves criteria with the default configuration.
pub fn resolve_filters(
    filters: &FilterSet,
    criteria: &FilterCriteria,
) -> ValidationResult<ClauseResult> {
    FilterResolver::new(filters).resolve(criteria)
}

/// A key counts as present only with a non-empty value.
fn present<'c>(criteria: &'c FilterCriteria, key: &str) -> Option<&'c str> {
    criteria
        .get(key)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

/// Bounds without leading digits are not compared; rejecting them is the
/// caller's job.
fn parse_bound(value: &str) -> Option<Bound> {
    Bound::parse(value)
}

/// The integer a range bound denotes, of unlimited width.
///
/// Read like a query-string integer: leading whitespace, an optional sign,
/// then the leading digits. Anything after the digits is ignored, so
/// `"10.5"` and `"10abc"` both denote 10.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Bound {
    negative: bool,
    /// Magnitude without leading zeros; empty for zero.
    digits: String,
}

impl Bound {
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim_start();
        let (negative, rest) = match value.as_bytes().first() {
            Some(b'-') => (true, &value[1..]),
            Some(b'+') => (false, &value[1..]),
            _ => (false, value),
        };

        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }

        let digits = rest[..len].trim_start_matches('0').to_string();
        Some(Self {
            negative: negative && !digits.is_empty(),
            digits,
        })
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = self
            .digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits));

        match (self.negative, other.negative) {
            (false, false) => magnitude,
            (true, true) => magnitude.reverse(),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return write!(f, "0");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.digits)
    }
}
