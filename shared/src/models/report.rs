//! Report output types
//!
//! Produced by the report engine, consumed read-only by the reports API.
//! All four reports are computed fresh from the full entity sets on each
//! request; none of these types round-trips back into the store.

use serde::{Deserialize, Serialize};

use super::Department;

/// One row of the department summary report
///
/// Averages are 0 when the department has no salary rows. Employees
/// without a salary count toward `employee_count` but contribute nothing
/// to the salary statistics.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentSummaryRow {
    pub department: Department,
    pub employee_count: i64,
    pub avg_gross_salary: f64,
    pub avg_net_salary: f64,
    pub total_gross_salary: f64,
    pub total_net_salary: f64,
}

/// One gross-salary band of the salary distribution report
///
/// `max: None` marks the open-ended top band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: f64,
    pub max: Option<f64>,
    pub count: i64,
}

/// Salary distribution report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryDistribution {
    pub total_salaries: i64,
    pub bands: Vec<SalaryBand>,
}

/// Gender bucket counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderCounts {
    pub male: i64,
    pub female: i64,
    pub other: i64,
}

/// Gender distribution report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenderDistribution {
    pub total_employees: i64,
    pub distribution: GenderCounts,
}

/// One member listed inside a tenure band
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureBandMember {
    pub employee_number: i64,
    pub name: String,
    /// Hire date formatted as `YYYY-MM-DD`
    pub hired_date: String,
    /// Tenure in years, rounded to one decimal for display
    pub tenure_years: f64,
}

/// One band of the employee tenure report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureBand {
    pub label: String,
    pub count: i64,
    pub members: Vec<TenureBandMember>,
}

/// Employee tenure report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenureReport {
    pub total_employees: i64,
    pub bands: Vec<TenureBand>,
}
