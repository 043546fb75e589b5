//! Salary Model

use serde::{Deserialize, Serialize};

use super::Employee;

/// Salary entity — at most one per employee
///
/// `total_deduction` is decimal-as-text, parsed server-side before any
/// arithmetic. `net_salary` is derived (`gross - deduction`) and never
/// accepted from callers; note its absence from the payload types below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Salary {
    pub id: i64,
    pub employee_number: i64,
    pub gross_salary: f64,
    pub total_deduction: String,
    pub net_salary: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create salary payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCreate {
    pub employee_number: i64,
    pub gross_salary: f64,
    pub total_deduction: String,
}

/// Update salary payload (only supplied fields change)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryUpdate {
    pub employee_number: Option<i64>,
    pub gross_salary: Option<f64>,
    pub total_deduction: Option<String>,
}

impl SalaryUpdate {
    /// True when no recognized field was supplied
    pub fn is_empty(&self) -> bool {
        self.employee_number.is_none()
            && self.gross_salary.is_none()
            && self.total_deduction.is_none()
    }
}

/// Salary enriched with its employee (for list/detail views)
#[derive(Debug, Clone, Serialize)]
pub struct SalaryWithEmployee {
    #[serde(flatten)]
    pub salary: Salary,
    pub employee: Option<Employee>,
}
