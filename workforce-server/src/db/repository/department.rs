//! Department Repository

use super::{RepoError, RepoResult, employee};
use shared::models::{Department, DepartmentCreate, DepartmentUpdate};
use sqlx::SqlitePool;

const DEPARTMENT_SELECT: &str =
    "SELECT code, name, gross_salary_budget, created_at, updated_at FROM department";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Department>> {
    let sql = format!("{DEPARTMENT_SELECT} ORDER BY code");
    let rows = sqlx::query_as::<_, Department>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_code(pool: &SqlitePool, code: i64) -> RepoResult<Option<Department>> {
    let sql = format!("{DEPARTMENT_SELECT} WHERE code = ?");
    let row = sqlx::query_as::<_, Department>(&sql)
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: DepartmentCreate) -> RepoResult<Department> {
    let now = shared::util::now_millis();
    let code = sqlx::query_scalar::<_, i64>(
        "INSERT INTO department (name, gross_salary_budget, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) RETURNING code",
    )
    .bind(data.name)
    .bind(data.gross_salary_budget)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_code(pool, code)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create department".into()))
}

pub async fn update(
    pool: &SqlitePool,
    code: i64,
    data: DepartmentUpdate,
) -> RepoResult<Department> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE department SET name = COALESCE(?1, name), gross_salary_budget = COALESCE(?2, gross_salary_budget), updated_at = ?3 WHERE code = ?4",
    )
    .bind(data.name)
    .bind(data.gross_salary_budget)
    .bind(now)
    .bind(code)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Department {code} not found")));
    }
    find_by_code(pool, code)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {code} not found")))
}

/// Hard delete a department; restricted while employees reference it
pub async fn delete(pool: &SqlitePool, code: i64) -> RepoResult<bool> {
    find_by_code(pool, code)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Department {code} not found")))?;

    if employee::exists_in_department(pool, code).await? {
        return Err(RepoError::Conflict(
            "Cannot delete department with assigned employees".into(),
        ));
    }

    sqlx::query("DELETE FROM department WHERE code = ?")
        .bind(code)
        .execute(pool)
        .await?;
    Ok(true)
}

/// True when the department exists (foreign-key pre-check for employee writes)
pub async fn exists(pool: &SqlitePool, code: i64) -> RepoResult<bool> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM department WHERE code = ? LIMIT 1")
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}
