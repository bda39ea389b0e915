//! Tests for the partial update builder and the statements built on it.

use proptest::prelude::*;
use serde_json::{Value, json};

use jobly_persistence::entities::{self, Company, Entity, Job, User};
use jobly_persistence::error::ValidationError;
use jobly_persistence::sql::{ColumnMap, SqlParam, UpdateFields, sql_for_partial_update};

// ============================================================================
// Helper Functions
// ============================================================================

fn fields(value: Value) -> UpdateFields {
    value.as_object().cloned().expect("update fields must be an object")
}

// ============================================================================
// SET Clause
// ============================================================================

#[test]
fn test_user_update_maps_camel_case() {
    let data = fields(json!({
        "firstName": "NewF",
        "lastName": "NewF",
        "email": "new@email.com",
        "isAdmin": true,
    }));

    let result = sql_for_partial_update(&data, &User::COLUMNS).unwrap();

    assert_eq!(
        result.clause,
        r#""first_name"=$1, "last_name"=$2, "email"=$3, "is_admin"=$4"#
    );
    assert_eq!(
        result.values,
        vec![
            SqlParam::text("NewF"),
            SqlParam::text("NewF"),
            SqlParam::text("new@email.com"),
            SqlParam::Bool(true),
        ]
    );
}

#[test]
fn test_empty_update_is_rejected() {
    let err = sql_for_partial_update(&UpdateFields::new(), &Job::COLUMNS).unwrap_err();
    assert_eq!(err, ValidationError::EmptyUpdate);
}

#[test]
fn test_identical_input_gives_identical_output() {
    let data = fields(json!({"title": "New", "salary": 500, "equity": "0.5"}));
    let first = sql_for_partial_update(&data, &Job::COLUMNS).unwrap();
    let second = sql_for_partial_update(&data, &Job::COLUMNS).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.clause, r#""title"=$1, "salary"=$2, "equity"=$3"#);
}

// ============================================================================
// UPDATE Statements
// ============================================================================

#[test]
fn test_job_update_statement() {
    let stmt = entities::update::<Job>(
        17i64,
        &fields(json!({"title": "Senior Dev", "salary": 150000})),
    )
    .unwrap();

    assert_eq!(
        stmt.sql,
        r#"UPDATE jobs SET "title"=$1, "salary"=$2 WHERE id = $3 RETURNING id, title, salary, equity, company_handle AS "compHandle""#
    );
    assert_eq!(
        stmt.params,
        vec![
            SqlParam::text("Senior Dev"),
            SqlParam::Integer(150000),
            SqlParam::Integer(17),
        ]
    );
}

#[test]
fn test_company_update_keys_by_handle() {
    let stmt = entities::update::<Company>(
        "c1",
        &fields(json!({"name": "C1 Renamed", "numEmployees": 42})),
    )
    .unwrap();

    assert!(stmt.sql.contains(r#"SET "name"=$1, "num_employees"=$2 WHERE handle = $3"#));
    assert_eq!(stmt.params.last(), Some(&SqlParam::text("c1")));
}

#[test]
fn test_update_statement_rejects_empty_fields() {
    let err = entities::update::<User>("u1", &UpdateFields::new()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyUpdate);
}

// ============================================================================
// Properties
// ============================================================================

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::from),
        Just(Value::Null),
    ]
}

fn arb_update_fields() -> impl Strategy<Value = UpdateFields> {
    prop::collection::vec(("[a-z][a-zA-Z]{0,8}", arb_scalar()), 1..8).prop_map(|pairs| {
        let mut map = UpdateFields::new();
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    })
}

const MAPPED: ColumnMap = ColumnMap::new(&[("firstName", "first_name"), ("a", "col_a")]);

proptest! {
    #[test]
    fn prop_one_assignment_per_key(data in arb_update_fields()) {
        let result = sql_for_partial_update(&data, &MAPPED).unwrap();
        let fragments: Vec<&str> = result.clause.split(", ").collect();

        prop_assert_eq!(fragments.len(), data.len());
        prop_assert_eq!(result.values.len(), data.len());

        for (i, ((key, value), fragment)) in data.iter().zip(&fragments).enumerate() {
            let expected = format!("\"{}\"=${}", MAPPED.column_for(key), i + 1);
            prop_assert_eq!(*fragment, expected.as_str());
            prop_assert_eq!(&result.values[i], &SqlParam::from(value));
        }
    }

    #[test]
    fn prop_key_follows_set_values(data in arb_update_fields(), id in any::<i64>()) {
        let stmt = entities::update::<Job>(id, &data).unwrap();
        let key = format!("WHERE id = ${} ", data.len() + 1);

        prop_assert!(stmt.sql.contains(&key));
        prop_assert_eq!(stmt.params.len(), data.len() + 1);
        prop_assert_eq!(stmt.params.last(), Some(&SqlParam::Integer(id)));
        prop_assert_eq!(stmt.max_placeholder(), stmt.params.len());
    }
}
