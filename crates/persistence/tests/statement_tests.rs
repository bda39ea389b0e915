//! Tests for the read, insert and delete statements of each entity.

use std::str::FromStr;

use rust_decimal::Decimal;

use jobly_persistence::config::ResolverConfig;
use jobly_persistence::entities::{self, Company, Job, NewCompany, NewJob, User};
use jobly_persistence::error::ValidationError;
use jobly_persistence::sql::{FilterCriteria, SqlParam};

// ============================================================================
// Filter Statements
// ============================================================================

#[test]
fn test_company_filter_statement() {
    let criteria = FilterCriteria::from([
        ("minEmployees".to_string(), "3".to_string()),
        ("nameLike".to_string(), "net".to_string()),
    ]);

    let stmt = entities::filter::<Company>(&criteria, ResolverConfig::default()).unwrap();

    assert_eq!(
        stmt.sql,
        r#"SELECT handle, name, description, num_employees AS "numEmployees", logo_url AS "logoUrl" FROM companies WHERE num_employees >= $1 AND name ILIKE $2 ORDER BY name"#
    );
    assert_eq!(stmt.params, vec![SqlParam::text("3"), SqlParam::text("%net%")]);
}

#[test]
fn test_job_filter_statement_with_equity_flag() {
    let criteria = FilterCriteria::from([("hasEquity".to_string(), "true".to_string())]);

    let stmt = entities::filter::<Job>(&criteria, ResolverConfig::default()).unwrap();

    assert!(stmt.sql.ends_with("FROM jobs WHERE equity > 0 ORDER BY title"));
    assert!(stmt.params.is_empty());
}

#[test]
fn test_filter_statement_propagates_validation() {
    let err = entities::filter::<User>(&FilterCriteria::new(), ResolverConfig::default())
        .unwrap_err();
    assert!(matches!(err, ValidationError::NoFilterCriteria { .. }));
}

// ============================================================================
// Insert, Get, Remove
// ============================================================================

#[test]
fn test_job_insert() {
    let job = NewJob {
        title: "testJob".to_string(),
        salary: Some(999),
        equity: Some(Decimal::from_str("0.012").unwrap()),
        company_handle: "c1".to_string(),
    };

    let stmt = job.insert();

    assert_eq!(stmt.params.len(), 4);
    assert_eq!(stmt.max_placeholder(), 4);
    assert!(stmt.sql.contains(r#"RETURNING id, title, salary, equity, company_handle AS "compHandle""#));
}

#[test]
fn test_company_insert() {
    let company = NewCompany {
        handle: "new".to_string(),
        name: "New".to_string(),
        description: "New Description".to_string(),
        num_employees: Some(1),
        logo_url: Some("http://new.img".to_string()),
    };

    let stmt = company.insert();

    assert!(stmt.sql.starts_with("INSERT INTO companies"));
    assert_eq!(stmt.params[0], SqlParam::text("new"));
    assert_eq!(stmt.params[4], SqlParam::text("http://new.img"));
}

#[test]
fn test_get_and_remove() {
    let stmt = entities::get::<Company>("c1");
    assert!(stmt.sql.ends_with("FROM companies WHERE handle = $1"));

    let stmt = entities::remove::<User>("u1");
    assert_eq!(stmt.sql, "DELETE FROM users WHERE username = $1 RETURNING username");
    assert_eq!(stmt.params, vec![SqlParam::text("u1")]);
}

#[test]
fn test_find_all_jobs() {
    let stmt = entities::find_all::<Job>();
    assert_eq!(
        stmt.sql,
        r#"SELECT id, title, salary, equity, company_handle AS "compHandle" FROM jobs ORDER BY title"#
    );
}
