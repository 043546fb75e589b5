//! Salary distribution report
//!
//! Gross salaries bucketed into fixed bands. Displayed bounds keep the
//! historical integer boundaries (0-10000, 10001-20000, ...); membership
//! is "first band whose upper bound admits the value", which matches the
//! integer boundaries exactly and keeps the bands exhaustive for
//! fractional amounts. Gross salary is validated non-negative at entry;
//! a negative value, were one ever stored, matches no band and is
//! silently excluded.

use shared::models::{Salary, SalaryBand, SalaryDistribution};

/// Displayed band bounds; `None` marks the open-ended top band
const SALARY_BANDS: &[(f64, Option<f64>)] = &[
    (0.0, Some(10000.0)),
    (10001.0, Some(20000.0)),
    (20001.0, Some(30000.0)),
    (30001.0, Some(40000.0)),
    (40001.0, Some(50000.0)),
    (50001.0, None),
];

pub fn build(salaries: &[Salary]) -> SalaryDistribution {
    let mut counts = [0i64; SALARY_BANDS.len()];

    for salary in salaries {
        let gross = salary.gross_salary;
        if gross < 0.0 {
            continue;
        }
        for (i, (_, max)) in SALARY_BANDS.iter().enumerate() {
            if max.map(|m| gross <= m).unwrap_or(true) {
                counts[i] += 1;
                break;
            }
        }
    }

    SalaryDistribution {
        total_salaries: salaries.len() as i64,
        bands: SALARY_BANDS
            .iter()
            .zip(counts)
            .map(|(&(min, max), count)| SalaryBand { min, max, count })
            .collect(),
    }
}
