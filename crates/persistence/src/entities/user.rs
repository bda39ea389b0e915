//! Users, keyed by username.

use super::Entity;
use crate::sql::{ColumnMap, FilterSet};

/// Descriptor for the `users` table.
///
/// Users are never listed by filter, so the filter set is empty and
/// [`filter`](super::filter) always rejects.
#[derive(Debug, Clone, Copy)]
pub struct User;

impl Entity for User {
    const NAME: &'static str = "user";
    const TABLE: &'static str = "users";
    const KEY_COLUMN: &'static str = "username";
    const SELECT: &'static str = r#"username, first_name AS "firstName", last_name AS "lastName", email, is_admin AS "isAdmin""#;
    const ORDER_BY: &'static str = "username";

    const FILTERS: FilterSet = FilterSet::new("user", &[]);

    const COLUMNS: ColumnMap<'static> = ColumnMap::new(&[
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("isAdmin", "is_admin"),
    ]);
}
