//! Companies, keyed by handle.

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::sql::{ColumnMap, FilterField, FilterSet, ParamList, Statement};

/// Descriptor for the `companies` table.
#[derive(Debug, Clone, Copy)]
pub struct Company;

impl Entity for Company {
    const NAME: &'static str = "company";
    const TABLE: &'static str = "companies";
    const KEY_COLUMN: &'static str = "handle";
    const SELECT: &'static str = r#"handle, name, description, num_employees AS "numEmployees", logo_url AS "logoUrl""#;
    const ORDER_BY: &'static str = "name";

    const FILTERS: FilterSet = FilterSet::new(
        "company",
        &[
            FilterField::min("minEmployees", "num_employees"),
            FilterField::max("maxEmployees", "num_employees"),
            FilterField::contains("nameLike", "name"),
        ],
    );

    const COLUMNS: ColumnMap<'static> = ColumnMap::new(&[
        ("numEmployees", "num_employees"),
        ("logoUrl", "logo_url"),
    ]);
}

/// A company to insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    /// Unique handle, the primary key.
    pub handle: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Head count, if known.
    #[serde(default)]
    pub num_employees: Option<i32>,
    /// Logo location, if any.
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl NewCompany {
    /// INSERT statement returning the created row.
    pub fn insert(&self) -> Statement {
        let mut params = ParamList::new();
        let values = [
            params.push(self.handle.as_str()),
            params.push(self.name.as_str()),
            params.push(self.description.as_str()),
            params.push(self.num_employees),
            params.push(self.logo_url.clone()),
        ]
        .map(|p| p.to_string())
        .join(", ");

        Statement::new(
            format!(
                "INSERT INTO companies (handle, name, description, num_employees, logo_url) VALUES ({}) RETURNING {}",
                values,
                Company::SELECT
            ),
            params,
        )
    }
}
