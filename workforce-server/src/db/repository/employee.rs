//! Employee Repository

use std::collections::HashMap;

use super::{RepoError, RepoResult, department, salary};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, EmployeeWithDepartment};
use sqlx::SqlitePool;

const EMPLOYEE_SELECT: &str = "SELECT employee_number, department_code, first_name, last_name, position, address, telephone, gender, hired_date, created_at, updated_at FROM employee";

/// Parse a hire date supplied as `YYYY-MM-DD` or RFC 3339 into UTC millis
fn parse_hired_date(value: &str) -> RepoResult<i64> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp_millis());
    }
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis())
        .map_err(|_| RepoError::Validation(format!("Invalid hired date: {value}")))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY employee_number");
    let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// All employees enriched with their department.
///
/// Loads both sets once and joins in memory; a dangling department code
/// yields `department: None` rather than an error.
pub async fn find_all_with_department(
    pool: &SqlitePool,
) -> RepoResult<Vec<EmployeeWithDepartment>> {
    let employees = find_all(pool).await?;
    let departments = department::find_all(pool).await?;

    let by_code: HashMap<i64, _> = departments.into_iter().map(|d| (d.code, d)).collect();

    Ok(employees
        .into_iter()
        .map(|e| {
            let dept = by_code.get(&e.department_code).cloned();
            EmployeeWithDepartment {
                employee: e,
                department: dept,
            }
        })
        .collect())
}

pub async fn find_by_number(pool: &SqlitePool, number: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE employee_number = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(number)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Single employee enriched with its department
pub async fn find_by_number_with_department(
    pool: &SqlitePool,
    number: i64,
) -> RepoResult<Option<EmployeeWithDepartment>> {
    let Some(employee) = find_by_number(pool, number).await? else {
        return Ok(None);
    };
    let dept = department::find_by_code(pool, employee.department_code).await?;
    Ok(Some(EmployeeWithDepartment {
        employee,
        department: dept,
    }))
}

pub async fn find_by_department(pool: &SqlitePool, code: i64) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE department_code = ? ORDER BY employee_number");
    let rows = sqlx::query_as::<_, Employee>(&sql)
        .bind(code)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<EmployeeWithDepartment> {
    // Verify the referenced department exists
    if !department::exists(pool, data.department_code).await? {
        return Err(RepoError::Reference("Department does not exist".into()));
    }

    let now = shared::util::now_millis();
    let hired_date = match data.hired_date.as_deref() {
        Some(value) => parse_hired_date(value)?,
        None => now,
    };

    let number = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee (department_code, first_name, last_name, position, address, telephone, gender, hired_date, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) RETURNING employee_number",
    )
    .bind(data.department_code)
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.position)
    .bind(data.address)
    .bind(data.telephone)
    .bind(data.gender)
    .bind(hired_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_number_with_department(pool, number)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(
    pool: &SqlitePool,
    number: i64,
    data: EmployeeUpdate,
) -> RepoResult<EmployeeWithDepartment> {
    find_by_number(pool, number)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {number} not found")))?;

    // Verify the new department exists if the reference is changing
    if let Some(code) = data.department_code
        && !department::exists(pool, code).await?
    {
        return Err(RepoError::Reference("Department does not exist".into()));
    }

    let hired_date = match data.hired_date.as_deref() {
        Some(value) => Some(parse_hired_date(value)?),
        None => None,
    };

    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE employee SET department_code = COALESCE(?1, department_code), first_name = COALESCE(?2, first_name), last_name = COALESCE(?3, last_name), position = COALESCE(?4, position), address = COALESCE(?5, address), telephone = COALESCE(?6, telephone), gender = COALESCE(?7, gender), hired_date = COALESCE(?8, hired_date), updated_at = ?9 WHERE employee_number = ?10",
    )
    .bind(data.department_code)
    .bind(data.first_name)
    .bind(data.last_name)
    .bind(data.position)
    .bind(data.address)
    .bind(data.telephone)
    .bind(data.gender)
    .bind(hired_date)
    .bind(now)
    .bind(number)
    .execute(pool)
    .await?;

    find_by_number_with_department(pool, number)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {number} not found")))
}

/// Hard delete an employee; restricted while a salary row references it
pub async fn delete(pool: &SqlitePool, number: i64) -> RepoResult<bool> {
    find_by_number(pool, number)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {number} not found")))?;

    if salary::exists_for_employee(pool, number).await? {
        return Err(RepoError::Conflict(
            "Cannot delete employee with salary records".into(),
        ));
    }

    sqlx::query("DELETE FROM employee WHERE employee_number = ?")
        .bind(number)
        .execute(pool)
        .await?;
    Ok(true)
}

/// True when the employee exists (foreign-key pre-check for salary writes)
pub async fn exists(pool: &SqlitePool, number: i64) -> RepoResult<bool> {
    let found =
        sqlx::query_scalar::<_, i64>("SELECT 1 FROM employee WHERE employee_number = ? LIMIT 1")
            .bind(number)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}

/// True when at least one employee belongs to the department (delete guard)
pub async fn exists_in_department(pool: &SqlitePool, code: i64) -> RepoResult<bool> {
    let found =
        sqlx::query_scalar::<_, i64>("SELECT 1 FROM employee WHERE department_code = ? LIMIT 1")
            .bind(code)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}
