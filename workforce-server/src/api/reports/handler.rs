//! Reports API Handlers
//!
//! Thin wrappers over the report engine. A store read failure aborts the
//! whole report (no partial results); the client sees an opaque 500 and
//! the detail goes to the log.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::reports;
use crate::utils::AppResult;
use shared::models::{DepartmentSummaryRow, GenderDistribution, SalaryDistribution, TenureReport};

/// GET /api/reports/department-summary - 部门汇总报表
pub async fn department_summary(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DepartmentSummaryRow>>> {
    let rows = reports::department_summary(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/reports/salary-distribution - 工资分布报表
pub async fn salary_distribution(
    State(state): State<ServerState>,
) -> AppResult<Json<SalaryDistribution>> {
    let report = reports::salary_distribution(&state.pool).await?;
    Ok(Json(report))
}

/// GET /api/reports/gender-distribution - 性别分布报表
pub async fn gender_distribution(
    State(state): State<ServerState>,
) -> AppResult<Json<GenderDistribution>> {
    let report = reports::gender_distribution(&state.pool).await?;
    Ok(Json(report))
}

/// GET /api/reports/employee-tenure - 员工年资报表
pub async fn employee_tenure(State(state): State<ServerState>) -> AppResult<Json<TenureReport>> {
    let report = reports::employee_tenure(&state.pool).await?;
    Ok(Json(report))
}
