//! Executable statements.

use serde::Serialize;

use super::params::{ParamList, SqlParam};

/// A complete SQL statement and its positional parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    /// SQL text with `$N` placeholders.
    pub sql: String,
    /// Values bound to `$1..$N`.
    pub params: Vec<SqlParam>,
}

impl Statement {
    /// Creates a statement from SQL and its bound parameters.
    pub fn new(sql: impl Into<String>, params: ParamList) -> Self {
        Self {
            sql: sql.into(),
            params: params.into_vec(),
        }
    }

    /// Creates a statement that binds nothing.
    pub fn unbound(sql: impl Into<String>) -> Self {
        Self::new(sql, ParamList::new())
    }

    /// Highest placeholder index referenced in the SQL text, or 0.
    pub fn max_placeholder(&self) -> usize {
        let bytes = self.sql.as_bytes();
        let mut max = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'$' {
                let digits = bytes[i + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                if let Ok(n) = self.sql[i + 1..i + 1 + digits].parse::<usize>() {
                    max = max.max(n);
                }
                i += digits;
            }
            i += 1;
        }
        max
    }
}
