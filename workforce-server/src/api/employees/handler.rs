//! Employee API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{employee, salary};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, EmployeeWithDepartment, Salary};

fn validate_create(payload: &EmployeeCreate) -> AppResult<()> {
    validate_required_text(&payload.first_name, "First name", MAX_NAME_LEN)?;
    validate_required_text(&payload.last_name, "Last name", MAX_NAME_LEN)?;
    validate_required_text(&payload.position, "Position", MAX_NAME_LEN)?;
    validate_required_text(&payload.address, "Address", MAX_ADDRESS_LEN)?;
    validate_required_text(&payload.telephone, "Telephone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.gender, "Gender", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

fn validate_update(payload: &EmployeeUpdate) -> AppResult<()> {
    validate_optional_text(&payload.first_name, "First name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.last_name, "Last name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.position, "Position", MAX_NAME_LEN)?;
    validate_optional_text(&payload.address, "Address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&payload.telephone, "Telephone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.gender, "Gender", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// GET /api/employees - 获取所有员工 (含部门信息)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<EmployeeWithDepartment>>> {
    let employees = employee::find_all_with_department(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employees/:number - 获取单个员工 (含部门信息)
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(number): Path<i64>,
) -> AppResult<Json<EmployeeWithDepartment>> {
    let emp = employee::find_by_number_with_department(&state.pool, number)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {number} not found")))?;
    Ok(Json(emp))
}

/// GET /api/employees/department/:code - 获取部门下的员工
pub async fn list_by_department(
    State(state): State<ServerState>,
    Path(code): Path<i64>,
) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_by_department(&state.pool, code).await?;
    Ok(Json(employees))
}

/// GET /api/employees/:number/salary - 获取员工的工资记录
pub async fn get_salary(
    State(state): State<ServerState>,
    Path(number): Path<i64>,
) -> AppResult<Json<Salary>> {
    let record = salary::find_by_employee(&state.pool, number)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Salary record not found for employee {number}"))
        })?;
    Ok(Json(record))
}

/// POST /api/employees - 创建员工
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<EmployeeWithDepartment>> {
    validate_create(&payload)?;

    let emp = employee::create(&state.pool, payload).await?;

    tracing::info!(
        operator = %current_user.email,
        employee_number = emp.employee.employee_number,
        "Employee created"
    );

    Ok(Json(emp))
}

/// PUT /api/employees/:number - 更新员工 (仅更新提供的字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(number): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeWithDepartment>> {
    if payload.is_empty() {
        return Err(AppError::validation("No valid update fields provided"));
    }
    validate_update(&payload)?;

    let emp = employee::update(&state.pool, number, payload).await?;
    Ok(Json(emp))
}

/// DELETE /api/employees/:number - 删除员工
///
/// 仍有工资记录引用该员工时拒绝删除 (restrict-on-delete)
pub async fn delete(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(number): Path<i64>,
) -> AppResult<Json<bool>> {
    let result = employee::delete(&state.pool, number).await?;

    if result {
        tracing::info!(
            operator = %current_user.email,
            employee_number = number,
            "Employee deleted"
        );
    }

    Ok(Json(result))
}
