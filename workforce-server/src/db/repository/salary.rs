//! Salary Repository
//!
//! Net salary is derived, never written through from the caller: create
//! and update both funnel through [`crate::payroll`] so the stored
//! `net_salary` always equals `gross - deduction` under the active
//! policy.

use std::collections::HashMap;

use super::{RepoError, RepoResult, employee, is_unique_violation};
use crate::payroll::{self, NetSalaryPolicy};
use shared::models::{Salary, SalaryCreate, SalaryUpdate, SalaryWithEmployee};
use sqlx::SqlitePool;

const SALARY_SELECT: &str = "SELECT id, employee_number, gross_salary, total_deduction, net_salary, created_at, updated_at FROM salary";

const DUPLICATE_SALARY: &str = "Salary record already exists for this employee";

fn validate_gross(gross: f64) -> RepoResult<()> {
    if !gross.is_finite() || gross < 0.0 {
        return Err(RepoError::Validation(format!(
            "Gross salary cannot be negative: {gross}"
        )));
    }
    Ok(())
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Salary>> {
    let sql = format!("{SALARY_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Salary>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// All salaries enriched with their employee.
///
/// Loads both sets once and joins in memory; a salary whose employee is
/// missing yields `employee: None` rather than an error.
pub async fn find_all_with_employee(pool: &SqlitePool) -> RepoResult<Vec<SalaryWithEmployee>> {
    let salaries = find_all(pool).await?;
    let employees = employee::find_all(pool).await?;

    let by_number: HashMap<i64, _> = employees
        .into_iter()
        .map(|e| (e.employee_number, e))
        .collect();

    Ok(salaries
        .into_iter()
        .map(|s| {
            let emp = by_number.get(&s.employee_number).cloned();
            SalaryWithEmployee {
                salary: s,
                employee: emp,
            }
        })
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Salary>> {
    let sql = format!("{SALARY_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Salary>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Single salary enriched with its employee
pub async fn find_by_id_with_employee(
    pool: &SqlitePool,
    id: i64,
) -> RepoResult<Option<SalaryWithEmployee>> {
    let Some(salary) = find_by_id(pool, id).await? else {
        return Ok(None);
    };
    let emp = employee::find_by_number(pool, salary.employee_number).await?;
    Ok(Some(SalaryWithEmployee {
        salary,
        employee: emp,
    }))
}

pub async fn find_by_employee(pool: &SqlitePool, number: i64) -> RepoResult<Option<Salary>> {
    let sql = format!("{SALARY_SELECT} WHERE employee_number = ? LIMIT 1");
    let row = sqlx::query_as::<_, Salary>(&sql)
        .bind(number)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    data: SalaryCreate,
    policy: NetSalaryPolicy,
) -> RepoResult<SalaryWithEmployee> {
    validate_gross(data.gross_salary)?;
    let deduction = payroll::parse_deduction(&data.total_deduction)?;

    // Verify the referenced employee exists
    if !employee::exists(pool, data.employee_number).await? {
        return Err(RepoError::Reference("Employee does not exist".into()));
    }

    // One salary row per employee
    if find_by_employee(pool, data.employee_number).await?.is_some() {
        return Err(RepoError::Conflict(DUPLICATE_SALARY.into()));
    }

    let net_salary = payroll::net_salary(data.gross_salary, deduction, policy);
    let now = shared::util::now_millis();

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO salary (employee_number, gross_salary, total_deduction, net_salary, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5) RETURNING id",
    )
    .bind(data.employee_number)
    .bind(data.gross_salary)
    .bind(data.total_deduction)
    .bind(net_salary)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        // A racing create slipped past the pre-check; the unique index
        // on employee_number is the hard stop.
        if is_unique_violation(&e) {
            RepoError::Conflict(DUPLICATE_SALARY.into())
        } else {
            e.into()
        }
    })?;

    find_by_id_with_employee(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create salary".into()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: SalaryUpdate,
    policy: NetSalaryPolicy,
) -> RepoResult<SalaryWithEmployee> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Salary record {id} not found")))?;

    // Any update that sets employee_number re-checks the reference;
    // uniqueness only matters when the reference actually changes, and
    // excludes the row being updated
    if let Some(number) = data.employee_number {
        if !employee::exists(pool, number).await? {
            return Err(RepoError::Reference("Employee does not exist".into()));
        }
        if number != existing.employee_number
            && let Some(other) = find_by_employee(pool, number).await?
            && other.id != id
        {
            return Err(RepoError::Conflict(DUPLICATE_SALARY.into()));
        }
    }

    if let Some(gross) = data.gross_salary {
        validate_gross(gross)?;
    }

    // Recompute net salary whenever either input is touched, reading the
    // stored value for whichever field was not supplied
    let (gross_salary, total_deduction, net_salary) =
        if data.gross_salary.is_some() || data.total_deduction.is_some() {
            let gross = data.gross_salary.unwrap_or(existing.gross_salary);
            let deduction_text = data
                .total_deduction
                .clone()
                .unwrap_or_else(|| existing.total_deduction.clone());
            let deduction = payroll::parse_deduction(&deduction_text)?;
            (gross, deduction_text, payroll::net_salary(gross, deduction, policy))
        } else {
            (
                existing.gross_salary,
                existing.total_deduction.clone(),
                existing.net_salary,
            )
        };

    let employee_number = data.employee_number.unwrap_or(existing.employee_number);
    let now = shared::util::now_millis();

    sqlx::query(
        "UPDATE salary SET employee_number = ?1, gross_salary = ?2, total_deduction = ?3, net_salary = ?4, updated_at = ?5 WHERE id = ?6",
    )
    .bind(employee_number)
    .bind(gross_salary)
    .bind(total_deduction)
    .bind(net_salary)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            RepoError::Conflict(DUPLICATE_SALARY.into())
        } else {
            e.into()
        }
    })?;

    find_by_id_with_employee(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Salary record {id} not found")))
}

/// Hard delete a salary record
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Salary record {id} not found")))?;

    sqlx::query("DELETE FROM salary WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(true)
}

/// True when a salary row references the employee (delete guard)
pub async fn exists_for_employee(pool: &SqlitePool, number: i64) -> RepoResult<bool> {
    let found =
        sqlx::query_scalar::<_, i64>("SELECT 1 FROM salary WHERE employee_number = ? LIMIT 1")
            .bind(number)
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}
