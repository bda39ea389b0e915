//! Positional parameters and the clause result shape.
//!
//! Every builder in this crate follows one indexing rule: the Nth value
//! pushed onto a [`ParamList`] is referenced by the placeholder `$N`.
//! Callers that add their own parameters after a builder has run push onto
//! the same list, so numbering continues at `len + 1` and the builder's
//! fragment is never renumbered.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// A SQL parameter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    /// Text parameter.
    Text(String),
    /// Integer parameter.
    Integer(i64),
    /// Floating point parameter.
    Float(f64),
    /// Exact decimal parameter (NUMERIC columns).
    Decimal(Decimal),
    /// Boolean parameter.
    Bool(bool),
    /// Structured JSON parameter (arrays and objects).
    Json(Value),
    /// Null parameter.
    Null,
}

impl SqlParam {
    /// Creates a text parameter.
    pub fn text(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }

    /// Returns true for [`SqlParam::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, SqlParam::Null)
    }
}

impl From<&str> for SqlParam {
    fn from(s: &str) -> Self {
        SqlParam::Text(s.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(s: String) -> Self {
        SqlParam::Text(s)
    }
}

impl From<i64> for SqlParam {
    fn from(n: i64) -> Self {
        SqlParam::Integer(n)
    }
}

impl From<i32> for SqlParam {
    fn from(n: i32) -> Self {
        SqlParam::Integer(n.into())
    }
}

impl From<f64> for SqlParam {
    fn from(n: f64) -> Self {
        SqlParam::Float(n)
    }
}

impl From<Decimal> for SqlParam {
    fn from(d: Decimal) -> Self {
        SqlParam::Decimal(d)
    }
}

impl From<bool> for SqlParam {
    fn from(b: bool) -> Self {
        SqlParam::Bool(b)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlParam::Null, Into::into)
    }
}

impl From<&Value> for SqlParam {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => SqlParam::Null,
            Value::Bool(b) => SqlParam::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => SqlParam::Integer(i),
                // u64 beyond i64::MAX and fractional numbers
                None => SqlParam::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => SqlParam::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => SqlParam::Json(value.clone()),
        }
    }
}

impl From<Value> for SqlParam {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => SqlParam::Text(s),
            other => SqlParam::from(&other),
        }
    }
}

/// A `$N` placeholder referencing the Nth value of a [`ParamList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Placeholder(usize);

impl Placeholder {
    /// The 1-based position this placeholder binds to.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// An ordered list of bound parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamList(Vec<SqlParam>);

impl ParamList {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value and returns the placeholder that references it.
    pub fn push(&mut self, value: impl Into<SqlParam>) -> Placeholder {
        self.0.push(value.into());
        Placeholder(self.0.len())
    }

    /// The placeholder the next pushed value will receive.
    pub fn next_placeholder(&self) -> Placeholder {
        Placeholder(self.0.len() + 1)
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bound values in placeholder order.
    pub fn as_slice(&self) -> &[SqlParam] {
        &self.0
    }

    /// Consumes the list, returning the values in placeholder order.
    pub fn into_vec(self) -> Vec<SqlParam> {
        self.0
    }
}

impl From<Vec<SqlParam>> for ParamList {
    fn from(values: Vec<SqlParam>) -> Self {
        Self(values)
    }
}

/// Output of the filter resolver and the partial update builder.
///
/// `clause` is spliced into a caller-authored SQL template; `values` are
/// bound positionally, `values[i]` to `$(i + 1)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseResult {
    /// The clause text with `$N` placeholders.
    pub clause: String,
    /// The parameter values, in placeholder order.
    pub values: Vec<SqlParam>,
}

impl ClauseResult {
    /// Creates a result from clause text and its bound parameters.
    pub fn new(clause: impl Into<String>, params: ParamList) -> Self {
        Self {
            clause: clause.into(),
            values: params.into_vec(),
        }
    }

    /// Splits the result so a caller can keep binding after it.
    pub fn into_parts(self) -> (String, ParamList) {
        (self.clause, ParamList::from(self.values))
    }
}

/// Quotes a SQL identifier, doubling any embedded quote.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
