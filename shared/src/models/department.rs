//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity
///
/// `gross_salary_budget` is decimal-as-text: the budget is entered and
/// displayed verbatim and never used in arithmetic server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub code: i64,
    pub name: String,
    pub gross_salary_budget: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
    pub gross_salary_budget: String,
}

/// Update department payload (only supplied fields change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentUpdate {
    pub name: Option<String>,
    pub gross_salary_budget: Option<String>,
}
