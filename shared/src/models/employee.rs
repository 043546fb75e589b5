//! Employee Model

use serde::{Deserialize, Serialize};

use super::Department;

/// Employee entity
///
/// `hired_date` is a UTC millisecond timestamp. `gender` is free text;
/// the gender report buckets it case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub employee_number: i64,
    pub department_code: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub address: String,
    pub telephone: String,
    pub gender: String,
    pub hired_date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Employee {
    /// Display name used in report member listings
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create employee payload
///
/// `hired_date` accepts `YYYY-MM-DD` or RFC 3339 and defaults to the
/// creation time when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub department_code: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub address: String,
    pub telephone: String,
    pub gender: String,
    pub hired_date: Option<String>,
}

/// Update employee payload (only supplied fields change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub department_code: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub gender: Option<String>,
    pub hired_date: Option<String>,
}

impl EmployeeUpdate {
    /// True when no recognized field was supplied
    pub fn is_empty(&self) -> bool {
        self.department_code.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.position.is_none()
            && self.address.is_none()
            && self.telephone.is_none()
            && self.gender.is_none()
            && self.hired_date.is_none()
    }
}

/// Employee enriched with its department (for list/detail views)
///
/// The join is performed in memory; a dangling `department_code` yields
/// `department: None` rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeWithDepartment {
    #[serde(flatten)]
    pub employee: Employee,
    pub department: Option<Department>,
}
