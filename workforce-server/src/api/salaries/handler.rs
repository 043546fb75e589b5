//! Salary API Handlers
//!
//! `net_salary` never appears in a payload: it is derived in the
//! repository through the payroll module on every create and on every
//! update touching either input.

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{employee, salary};
use crate::utils::{AppError, AppResult};
use shared::models::{SalaryCreate, SalaryUpdate, SalaryWithEmployee};

/// GET /api/salaries - 获取所有工资记录 (含员工信息)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SalaryWithEmployee>>> {
    let salaries = salary::find_all_with_employee(&state.pool).await?;
    Ok(Json(salaries))
}

/// GET /api/salaries/:id - 获取单条工资记录 (含员工信息)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SalaryWithEmployee>> {
    let record = salary::find_by_id_with_employee(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Salary record {id} not found")))?;
    Ok(Json(record))
}

/// GET /api/salaries/employee/:number - 按员工查询工资记录
pub async fn get_by_employee(
    State(state): State<ServerState>,
    Path(number): Path<i64>,
) -> AppResult<Json<SalaryWithEmployee>> {
    let record = salary::find_by_employee(&state.pool, number)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Salary record not found for employee {number}"))
        })?;
    let emp = employee::find_by_number(&state.pool, number).await?;
    Ok(Json(SalaryWithEmployee {
        salary: record,
        employee: emp,
    }))
}

/// POST /api/salaries - 创建工资记录
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<SalaryCreate>,
) -> AppResult<Json<SalaryWithEmployee>> {
    let record = salary::create(&state.pool, payload, state.config.net_salary_policy).await?;

    tracing::info!(
        operator = %current_user.email,
        salary_id = record.salary.id,
        employee_number = record.salary.employee_number,
        "Salary record created"
    );

    Ok(Json(record))
}

/// PUT /api/salaries/:id - 更新工资记录 (仅更新提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SalaryUpdate>,
) -> AppResult<Json<SalaryWithEmployee>> {
    if payload.is_empty() {
        return Err(AppError::validation("No valid update fields provided"));
    }

    let record = salary::update(&state.pool, id, payload, state.config.net_salary_policy).await?;
    Ok(Json(record))
}

/// DELETE /api/salaries/:id - 删除工资记录
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = salary::delete(&state.pool, id).await?;

    if result {
        tracing::info!(operator = %current_user.email, salary_id = id, "Salary record deleted");
    }

    Ok(Json(result))
}
