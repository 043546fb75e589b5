//! Department API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::{department, employee};
use crate::utils::validation::{MAX_DECIMAL_TEXT_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate, Employee};

/// GET /api/departments - 获取所有部门
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let departments = department::find_all(&state.pool).await?;
    Ok(Json(departments))
}

/// GET /api/departments/:code - 获取单个部门
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<i64>,
) -> AppResult<Json<Department>> {
    let dept = department::find_by_code(&state.pool, code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {code} not found")))?;
    Ok(Json(dept))
}

/// POST /api/departments - 创建部门
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    validate_required_text(&payload.name, "Department name", MAX_NAME_LEN)?;
    validate_required_text(
        &payload.gross_salary_budget,
        "Gross salary budget",
        MAX_DECIMAL_TEXT_LEN,
    )?;

    let dept = department::create(&state.pool, payload).await?;
    Ok(Json(dept))
}

/// PUT /api/departments/:code - 更新部门 (仅更新提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(code): Path<i64>,
    Json(payload): Json<DepartmentUpdate>,
) -> AppResult<Json<Department>> {
    if payload.name.is_none() && payload.gross_salary_budget.is_none() {
        return Err(AppError::validation("No valid update fields provided"));
    }
    validate_optional_text(&payload.name, "Department name", MAX_NAME_LEN)?;
    validate_optional_text(
        &payload.gross_salary_budget,
        "Gross salary budget",
        MAX_DECIMAL_TEXT_LEN,
    )?;

    let dept = department::update(&state.pool, code, payload).await?;
    Ok(Json(dept))
}

/// DELETE /api/departments/:code - 删除部门
///
/// 仍有员工挂在该部门时拒绝删除 (restrict-on-delete)
pub async fn delete(
    State(state): State<ServerState>,
    Path(code): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = department::delete(&state.pool, code).await?;
    Ok(Json(result))
}

/// GET /api/departments/:code/employees - 获取部门下的员工
pub async fn list_employees(
    State(state): State<ServerState>,
    Path(code): Path<i64>,
) -> AppResult<Json<Vec<Employee>>> {
    department::find_by_code(&state.pool, code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {code} not found")))?;

    let employees = employee::find_by_department(&state.pool, code).await?;
    Ok(Json(employees))
}
