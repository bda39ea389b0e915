//! Jobs, keyed by a serial id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::sql::{ColumnMap, FilterField, FilterSet, ParamList, Statement};

/// Descriptor for the `jobs` table.
#[derive(Debug, Clone, Copy)]
pub struct Job;

impl Entity for Job {
    const NAME: &'static str = "job";
    const TABLE: &'static str = "jobs";
    const KEY_COLUMN: &'static str = "id";
    const SELECT: &'static str =
        r#"id, title, salary, equity, company_handle AS "compHandle""#;
    const ORDER_BY: &'static str = "title";

    // hasEquity sits between the salary bound and the title match
    const FILTERS: FilterSet = FilterSet::new(
        "job",
        &[
            FilterField::min("minSalary", "salary"),
            FilterField::flag("hasEquity", "equity"),
            FilterField::contains("title", "title"),
        ],
    );

    const COLUMNS: ColumnMap<'static> = ColumnMap::new(&[("compHandle", "company_handle")]);
}

/// A job to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    /// Job title.
    pub title: String,
    /// Annual salary, if disclosed.
    #[serde(default)]
    pub salary: Option<i32>,
    /// Equity fraction between 0 and 1, if offered.
    #[serde(default)]
    pub equity: Option<Decimal>,
    /// Handle of the hiring company, `compHandle` in request bodies.
    #[serde(rename = "compHandle")]
    pub company_handle: String,
}

impl NewJob {
    /// INSERT statement returning the created row.
    pub fn insert(&self) -> Statement {
        let mut params = ParamList::new();
        let values = [
            params.push(self.title.as_str()),
            params.push(self.salary),
            params.push(self.equity),
            params.push(self.company_handle.as_str()),
        ]
        .map(|p| p.to_string())
        .join(", ");

        Statement::new(
            format!(
                "INSERT INTO jobs (title, salary, equity, company_handle) VALUES ({}) RETURNING {}",
                values,
                Job::SELECT
            ),
            params,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::sql::SqlParam;

    #[test]
    fn test_insert_binds_equity_as_decimal() {
        let job = NewJob {
            title: "testJob".to_string(),
            salary: Some(999),
            equity: Some(Decimal::from_str("0.012").unwrap()),
            company_handle: "c1".to_string(),
        };

        let stmt = job.insert();

        assert!(stmt.sql.starts_with(
            "INSERT INTO jobs (title, salary, equity, company_handle) VALUES ($1, $2, $3, $4)"
        ));
        assert_eq!(
            stmt.params,
            vec![
                SqlParam::text("testJob"),
                SqlParam::Integer(999),
                SqlParam::Decimal(Decimal::from_str("0.012").unwrap()),
                SqlParam::text("c1"),
            ]
        );
    }

    #[test]
    fn test_company_handle_uses_external_name() {
        let job: NewJob =
            serde_json::from_str(r#"{"title": "j", "compHandle": "c2", "salary": 10}"#).unwrap();
        assert_eq!(job.company_handle, "c2");
        assert!(Job::SELECT.ends_with(r#"company_handle AS "compHandle""#));
        assert_eq!(Job::COLUMNS.column_for("compHandle"), "company_handle");

        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["compHandle"], "c2");
    }

    #[test]
    fn test_new_job_accepts_missing_optionals() {
        let job: NewJob =
            serde_json::from_str(r#"{"title": "j", "compHandle": "c1"}"#).unwrap();
        let stmt = job.insert();
        assert_eq!(stmt.params[1], SqlParam::Null);
        assert_eq!(stmt.params[2], SqlParam::Null);
    }
}
