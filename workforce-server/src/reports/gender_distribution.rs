//! Gender distribution report
//!
//! Gender is free text on the employee record; bucketing is a
//! case-insensitive exact match on "male" / "female", with everything
//! else (including empty or unexpected values) counted as other.

use shared::models::{Employee, GenderCounts, GenderDistribution};

pub fn build(employees: &[Employee]) -> GenderDistribution {
    let mut distribution = GenderCounts::default();

    for emp in employees {
        if emp.gender.eq_ignore_ascii_case("male") {
            distribution.male += 1;
        } else if emp.gender.eq_ignore_ascii_case("female") {
            distribution.female += 1;
        } else {
            distribution.other += 1;
        }
    }

    GenderDistribution {
        total_employees: employees.len() as i64,
        distribution,
    }
}
