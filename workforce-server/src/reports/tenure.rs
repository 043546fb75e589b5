//! Employee tenure report
//!
//! Tenure in years uses a 365.25-day year (leap years on average, not
//! calendar-exact). Bands are half-open, tested in order, first match
//! wins; the one-month boundary is 1/12 of a year. Tenure is clamped at
//! zero so a future-dated hire lands in the first band and the band
//! counts always sum to the employee total.
//!
//! Members are listed in employee-set order. That ordering is incidental
//! to source iteration, not a contract.

use shared::models::{Employee, TenureBand, TenureBandMember, TenureReport};

const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.25;
const ONE_MONTH_YEARS: f64 = 1.0 / 12.0;

/// Band bounds in years plus display label
const TENURE_BANDS: &[(f64, f64, &str)] = &[
    (0.0, ONE_MONTH_YEARS, "Less than a month"),
    (ONE_MONTH_YEARS, 1.0, "1 month - 1 year"),
    (1.0, 3.0, "1-3 years"),
    (3.0, 5.0, "3-5 years"),
    (5.0, 10.0, "5-10 years"),
    (10.0, f64::INFINITY, "10+ years"),
];

fn format_hired_date(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn build(employees: &[Employee], now_millis: i64) -> TenureReport {
    let mut bands: Vec<TenureBand> = TENURE_BANDS
        .iter()
        .map(|&(_, _, label)| TenureBand {
            label: label.to_string(),
            count: 0,
            members: Vec::new(),
        })
        .collect();

    for emp in employees {
        let tenure_years =
            (((now_millis - emp.hired_date) as f64) / MILLIS_PER_YEAR).max(0.0);

        for (i, &(min, max, _)) in TENURE_BANDS.iter().enumerate() {
            if tenure_years >= min && tenure_years < max {
                bands[i].count += 1;
                bands[i].members.push(TenureBandMember {
                    employee_number: emp.employee_number,
                    name: emp.display_name(),
                    hired_date: format_hired_date(emp.hired_date),
                    // one decimal for display
                    tenure_years: (tenure_years * 10.0).round() / 10.0,
                });
                break;
            }
        }
    }

    TenureReport {
        total_employees: employees.len() as i64,
        bands,
    }
}
