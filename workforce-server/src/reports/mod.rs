//! Report Engine
//!
//! Builds the four statistical reports from the full current entity
//! sets. Each report is a pure builder over in-memory sets plus an async
//! entry point that loads those sets through the repositories; nothing
//! here ever mutates the store.
//!
//! Joins are performed in memory (index one side by key, then look up)
//! instead of per-row queries. Reads are not isolated from concurrent
//! writes, so a report may reflect a torn snapshot; acceptable for an
//! administrative reporting tool. Any read failure aborts the whole
//! report — partial results are never returned.

pub mod department_summary;
pub mod gender_distribution;
pub mod salary_distribution;
pub mod tenure;

use crate::db::repository::{self, RepoResult};
use shared::models::{DepartmentSummaryRow, GenderDistribution, SalaryDistribution, TenureReport};
use sqlx::SqlitePool;

/// Department rollup: employee count + salary averages and totals
pub async fn department_summary(pool: &SqlitePool) -> RepoResult<Vec<DepartmentSummaryRow>> {
    let departments = repository::department::find_all(pool).await?;
    let employees = repository::employee::find_all(pool).await?;
    let salaries = repository::salary::find_all(pool).await?;
    Ok(department_summary::build(departments, &employees, &salaries))
}

/// Histogram of gross salaries over fixed bands
pub async fn salary_distribution(pool: &SqlitePool) -> RepoResult<SalaryDistribution> {
    let salaries = repository::salary::find_all(pool).await?;
    Ok(salary_distribution::build(&salaries))
}

/// Employee counts bucketed by gender
pub async fn gender_distribution(pool: &SqlitePool) -> RepoResult<GenderDistribution> {
    let employees = repository::employee::find_all(pool).await?;
    Ok(gender_distribution::build(&employees))
}

/// Employees bucketed by years of service, with member listings
pub async fn employee_tenure(pool: &SqlitePool) -> RepoResult<TenureReport> {
    let employees = repository::employee::find_all(pool).await?;
    Ok(tenure::build(&employees, shared::util::now_millis()))
}
