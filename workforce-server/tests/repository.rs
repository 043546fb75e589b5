//! Repository-level tests: referential integrity, salary uniqueness,
//! delete guards and net-salary derivation against a real (in-memory)
//! database.

mod common;

use shared::models::{DepartmentCreate, EmployeeCreate, EmployeeUpdate, SalaryCreate, SalaryUpdate};
use sqlx::SqlitePool;
use workforce_server::NetSalaryPolicy;
use workforce_server::db::repository::{RepoError, department, employee, salary};

async fn seed_department(pool: &SqlitePool, name: &str) -> i64 {
    department::create(
        pool,
        DepartmentCreate {
            name: name.to_string(),
            gross_salary_budget: "500000".to_string(),
        },
    )
    .await
    .expect("Failed to create department")
    .code
}

async fn seed_employee(pool: &SqlitePool, department_code: i64, gender: &str) -> i64 {
    employee::create(
        pool,
        EmployeeCreate {
            department_code,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            position: "Engineer".to_string(),
            address: "1 Harbor St".to_string(),
            telephone: "555-0100".to_string(),
            gender: gender.to_string(),
            hired_date: None,
        },
    )
    .await
    .expect("Failed to create employee")
    .employee
    .employee_number
}

fn policy() -> NetSalaryPolicy {
    NetSalaryPolicy::default()
}

#[tokio::test]
async fn db_service_applies_migrations_on_disk() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("workforce.db");

    let db = workforce_server::db::DbService::new(&path.to_string_lossy())
        .await
        .expect("Failed to open database");

    let dept = seed_department(&db.pool, "Engineering").await;
    assert!(dept > 0);
    assert!(
        department::find_by_code(&db.pool, dept)
            .await
            .expect("Failed to read department")
            .is_some()
    );
}

#[tokio::test]
async fn net_salary_is_derived_on_create() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp = seed_employee(&pool, dept, "Female").await;

    let record = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: 30000.0,
            total_deduction: "5000".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    assert_eq!(record.salary.net_salary, 25000.0);
}

#[tokio::test]
async fn partial_update_recomputes_net_from_stored_values() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp = seed_employee(&pool, dept, "Female").await;

    let record = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: 30000.0,
            total_deduction: "5000".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    // Touch only gross: stored deduction is reused
    let updated = salary::update(
        &pool,
        record.salary.id,
        SalaryUpdate {
            employee_number: None,
            gross_salary: Some(40000.0),
            total_deduction: None,
        },
        policy(),
    )
    .await
    .expect("Failed to update salary");
    assert_eq!(updated.salary.net_salary, 35000.0);

    // Touch only deduction: stored gross is reused
    let updated = salary::update(
        &pool,
        record.salary.id,
        SalaryUpdate {
            employee_number: None,
            gross_salary: None,
            total_deduction: Some("10000".to_string()),
        },
        policy(),
    )
    .await
    .expect("Failed to update salary");
    assert_eq!(updated.salary.net_salary, 30000.0);
    assert_eq!(updated.salary.gross_salary, 40000.0);
}

#[tokio::test]
async fn second_salary_for_employee_is_rejected() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp = seed_employee(&pool, dept, "Male").await;

    salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: 20000.0,
            total_deduction: "0".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    let err = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: 99999.0,
            total_deduction: "123".to_string(),
        },
        policy(),
    )
    .await
    .expect_err("Duplicate salary must be rejected");

    match err {
        RepoError::Conflict(msg) => {
            assert_eq!(msg, "Salary record already exists for this employee")
        }
        other => panic!("Expected conflict, got {other:?}"),
    }
}

#[tokio::test]
async fn moving_salary_onto_covered_employee_is_rejected() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let covered = seed_employee(&pool, dept, "Male").await;
    let uncovered = seed_employee(&pool, dept, "Female").await;

    salary::create(
        &pool,
        SalaryCreate {
            employee_number: covered,
            gross_salary: 20000.0,
            total_deduction: "0".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    let second = salary::create(
        &pool,
        SalaryCreate {
            employee_number: uncovered,
            gross_salary: 25000.0,
            total_deduction: "0".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    let err = salary::update(
        &pool,
        second.salary.id,
        SalaryUpdate {
            employee_number: Some(covered),
            gross_salary: None,
            total_deduction: None,
        },
        policy(),
    )
    .await
    .expect_err("Moving onto a covered employee must be rejected");
    assert!(matches!(err, RepoError::Conflict(_)));

    // Re-asserting the current employee is not a conflict
    salary::update(
        &pool,
        second.salary.id,
        SalaryUpdate {
            employee_number: Some(uncovered),
            gross_salary: None,
            total_deduction: None,
        },
        policy(),
    )
    .await
    .expect("Update keeping the same employee must succeed");
}

#[tokio::test]
async fn department_delete_is_guarded_by_employees() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp = seed_employee(&pool, dept, "Male").await;

    let err = department::delete(&pool, dept)
        .await
        .expect_err("Delete with assigned employees must fail");
    match err {
        RepoError::Conflict(msg) => {
            assert_eq!(msg, "Cannot delete department with assigned employees")
        }
        other => panic!("Expected conflict, got {other:?}"),
    }

    employee::delete(&pool, emp)
        .await
        .expect("Failed to delete employee");
    assert!(
        department::delete(&pool, dept)
            .await
            .expect("Empty department must delete")
    );
}

#[tokio::test]
async fn employee_delete_is_guarded_by_salary() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp = seed_employee(&pool, dept, "Male").await;

    let record = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: 10000.0,
            total_deduction: "0".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    let err = employee::delete(&pool, emp)
        .await
        .expect_err("Delete with salary records must fail");
    match err {
        RepoError::Conflict(msg) => {
            assert_eq!(msg, "Cannot delete employee with salary records")
        }
        other => panic!("Expected conflict, got {other:?}"),
    }

    salary::delete(&pool, record.salary.id)
        .await
        .expect("Failed to delete salary");
    assert!(
        employee::delete(&pool, emp)
            .await
            .expect("Employee without salary must delete")
    );
}

#[tokio::test]
async fn writes_against_missing_references_are_rejected() {
    let pool = common::test_pool().await;

    let err = employee::create(
        &pool,
        EmployeeCreate {
            department_code: 404,
            first_name: "No".to_string(),
            last_name: "Body".to_string(),
            position: "Ghost".to_string(),
            address: "Nowhere".to_string(),
            telephone: "555-0000".to_string(),
            gender: "Male".to_string(),
            hired_date: None,
        },
    )
    .await
    .expect_err("Unknown department must be rejected");
    match err {
        RepoError::Reference(msg) => assert_eq!(msg, "Department does not exist"),
        other => panic!("Expected reference error, got {other:?}"),
    }

    let err = salary::create(
        &pool,
        SalaryCreate {
            employee_number: 404,
            gross_salary: 1000.0,
            total_deduction: "0".to_string(),
        },
        policy(),
    )
    .await
    .expect_err("Unknown employee must be rejected");
    match err {
        RepoError::Reference(msg) => assert_eq!(msg, "Employee does not exist"),
        other => panic!("Expected reference error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_salary_inputs_are_rejected() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp = seed_employee(&pool, dept, "Male").await;

    let err = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: -1.0,
            total_deduction: "0".to_string(),
        },
        policy(),
    )
    .await
    .expect_err("Negative gross must be rejected");
    assert!(matches!(err, RepoError::Validation(_)));

    let err = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp,
            gross_salary: 1000.0,
            total_deduction: "not-a-number".to_string(),
        },
        policy(),
    )
    .await
    .expect_err("Non-numeric deduction must be rejected");
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn negative_net_is_persisted_unless_clamped() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let emp_a = seed_employee(&pool, dept, "Male").await;
    let emp_b = seed_employee(&pool, dept, "Female").await;

    // Deduction exceeding gross persists a negative net by default
    let record = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp_a,
            gross_salary: 1000.0,
            total_deduction: "1500".to_string(),
        },
        NetSalaryPolicy::default(),
    )
    .await
    .expect("Failed to create salary");
    assert_eq!(record.salary.net_salary, -500.0);

    // With the clamp policy enabled the derived net floors at zero
    let record = salary::create(
        &pool,
        SalaryCreate {
            employee_number: emp_b,
            gross_salary: 1000.0,
            total_deduction: "1500".to_string(),
        },
        NetSalaryPolicy {
            clamp_at_zero: true,
        },
    )
    .await
    .expect("Failed to create salary");
    assert_eq!(record.salary.net_salary, 0.0);
}

#[tokio::test]
async fn employee_partial_update_preserves_other_fields() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let other_dept = seed_department(&pool, "Sales").await;
    let emp = seed_employee(&pool, dept, "Female").await;

    let updated = employee::update(
        &pool,
        emp,
        EmployeeUpdate {
            department_code: Some(other_dept),
            first_name: None,
            last_name: None,
            position: Some("Manager".to_string()),
            address: None,
            telephone: None,
            gender: None,
            hired_date: None,
        },
    )
    .await
    .expect("Failed to update employee");

    assert_eq!(updated.employee.department_code, other_dept);
    assert_eq!(updated.employee.position, "Manager");
    // Untouched fields survive
    assert_eq!(updated.employee.first_name, "Grace");
    assert_eq!(updated.employee.telephone, "555-0100");
    assert_eq!(
        updated
            .department
            .as_ref()
            .map(|d| d.name.as_str()),
        Some("Sales")
    );
}

#[tokio::test]
async fn hired_date_accepts_calendar_dates() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;

    let created = employee::create(
        &pool,
        EmployeeCreate {
            department_code: dept,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            position: "Engineer".to_string(),
            address: "12 Analytical Way".to_string(),
            telephone: "555-0101".to_string(),
            gender: "Female".to_string(),
            hired_date: Some("2020-01-15".to_string()),
        },
    )
    .await
    .expect("Failed to create employee");

    // 2020-01-15T00:00:00Z
    assert_eq!(created.employee.hired_date, 1_579_046_400_000);

    let err = employee::create(
        &pool,
        EmployeeCreate {
            department_code: dept,
            first_name: "Bad".to_string(),
            last_name: "Date".to_string(),
            position: "Engineer".to_string(),
            address: "12 Analytical Way".to_string(),
            telephone: "555-0102".to_string(),
            gender: "Male".to_string(),
            hired_date: Some("15/01/2020".to_string()),
        },
    )
    .await
    .expect_err("Unparseable date must be rejected");
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn department_summary_over_live_data() {
    let pool = common::test_pool().await;
    let dept = seed_department(&pool, "Engineering").await;
    let covered = seed_employee(&pool, dept, "Male").await;
    let _uncovered = seed_employee(&pool, dept, "Female").await;

    salary::create(
        &pool,
        SalaryCreate {
            employee_number: covered,
            gross_salary: 30000.0,
            total_deduction: "5000".to_string(),
        },
        policy(),
    )
    .await
    .expect("Failed to create salary");

    let rows = workforce_server::reports::department_summary(&pool)
        .await
        .expect("Failed to build department summary");

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.employee_count, 2);
    assert_eq!(row.avg_gross_salary, 30000.0);
    assert_eq!(row.avg_net_salary, 25000.0);
    assert_eq!(row.total_gross_salary, 30000.0);
    assert_eq!(row.total_net_salary, 25000.0);
}
