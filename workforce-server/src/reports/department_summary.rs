//! Department summary report
//!
//! One row per department, in department-set order: employee count plus
//! averages and totals over the salary rows of that department's
//! employees. An employee without a salary row counts toward the
//! headcount but contributes nothing to the salary statistics. No grand
//! total row is produced; rolling the rows up is a display concern.

use std::collections::HashMap;

use shared::models::{Department, DepartmentSummaryRow, Employee, Salary};

pub fn build(
    departments: Vec<Department>,
    employees: &[Employee],
    salaries: &[Salary],
) -> Vec<DepartmentSummaryRow> {
    // Index employees by department and salaries by employee up front
    let mut members: HashMap<i64, Vec<&Employee>> = HashMap::new();
    for emp in employees {
        members.entry(emp.department_code).or_default().push(emp);
    }
    let salary_by_employee: HashMap<i64, &Salary> =
        salaries.iter().map(|s| (s.employee_number, s)).collect();

    departments
        .into_iter()
        .map(|dept| {
            let dept_employees = members.get(&dept.code).map(Vec::as_slice).unwrap_or(&[]);
            let dept_salaries: Vec<&Salary> = dept_employees
                .iter()
                .filter_map(|e| salary_by_employee.get(&e.employee_number).copied())
                .collect();

            let total_gross: f64 = dept_salaries.iter().map(|s| s.gross_salary).sum();
            let total_net: f64 = dept_salaries.iter().map(|s| s.net_salary).sum();
            // Guard the division: a department whose employees have no
            // salary rows reports zeros
            let (avg_gross, avg_net) = if dept_salaries.is_empty() {
                (0.0, 0.0)
            } else {
                let n = dept_salaries.len() as f64;
                (total_gross / n, total_net / n)
            };

            DepartmentSummaryRow {
                employee_count: dept_employees.len() as i64,
                avg_gross_salary: avg_gross,
                avg_net_salary: avg_net,
                total_gross_salary: total_gross,
                total_net_salary: total_net,
                department: dept,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(code: i64, name: &str) -> Department {
        Department {
            code,
            name: name.to_string(),
            gross_salary_budget: "100000".to_string(),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn emp(number: i64, department_code: i64) -> Employee {
        Employee {
            employee_number: number,
            department_code,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            position: "Engineer".to_string(),
            address: "12 Analytical Way".to_string(),
            telephone: "555-0100".to_string(),
            gender: "Female".to_string(),
            hired_date: 0,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn sal(id: i64, employee_number: i64, gross: f64, net: f64) -> Salary {
        Salary {
            id,
            employee_number,
            gross_salary: gross,
            total_deduction: format!("{}", gross - net),
            net_salary: net,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn averages_skip_employees_without_salary() {
        // Two employees, one salary row: averages are over the single
        // salary, headcount is still 2
        let departments = vec![dept(1, "Engineering")];
        let employees = vec![emp(1, 1), emp(2, 1)];
        let salaries = vec![sal(1, 1, 30000.0, 25000.0)];

        let rows = build(departments, &employees, &salaries);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.employee_count, 2);
        assert_eq!(row.avg_gross_salary, 30000.0);
        assert_eq!(row.avg_net_salary, 25000.0);
        assert_eq!(row.total_gross_salary, 30000.0);
        assert_eq!(row.total_net_salary, 25000.0);
    }

    #[test]
    fn empty_department_reports_zeros() {
        let rows = build(vec![dept(7, "Facilities")], &[], &[]);
        assert_eq!(rows[0].employee_count, 0);
        assert_eq!(rows[0].avg_gross_salary, 0.0);
        assert_eq!(rows[0].total_net_salary, 0.0);
    }

    #[test]
    fn headcounts_sum_to_employee_total() {
        let departments = vec![dept(1, "A"), dept(2, "B"), dept(3, "C")];
        let employees = vec![emp(1, 1), emp(2, 1), emp(3, 2), emp(4, 2), emp(5, 2)];

        let rows = build(departments, &employees, &[]);
        let total: i64 = rows.iter().map(|r| r.employee_count).sum();
        assert_eq!(total, employees.len() as i64);
    }

    #[test]
    fn rows_follow_department_set_order() {
        let departments = vec![dept(3, "C"), dept(1, "A")];
        let rows = build(departments, &[], &[]);
        assert_eq!(rows[0].department.code, 3);
        assert_eq!(rows[1].department.code, 1);
    }

    #[test]
    fn totals_and_averages_over_multiple_salaries() {
        let departments = vec![dept(1, "Sales")];
        let employees = vec![emp(1, 1), emp(2, 1), emp(3, 1)];
        let salaries = vec![
            sal(1, 1, 20000.0, 18000.0),
            sal(2, 2, 40000.0, 30000.0),
        ];

        let rows = build(departments, &employees, &salaries);
        let row = &rows[0];
        assert_eq!(row.employee_count, 3);
        assert_eq!(row.total_gross_salary, 60000.0);
        assert_eq!(row.total_net_salary, 48000.0);
        assert_eq!(row.avg_gross_salary, 30000.0);
        assert_eq!(row.avg_net_salary, 24000.0);
    }
}
