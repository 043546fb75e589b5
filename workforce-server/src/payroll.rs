//! Net salary derivation
//!
//! Single source of truth for `net_salary = gross_salary - total_deduction`.
//! The deduction arrives as decimal text and is parsed here before any
//! arithmetic.
//!
//! Whether a negative net (deduction exceeding gross) is floor-clamped at
//! zero is a policy knob. The UI historically clamped while the server
//! persisted the negative value as-is; the server behavior is the default
//! and the knob (`CLAMP_NEGATIVE_NET`) is pending product clarification.

use crate::db::repository::{RepoError, RepoResult};

/// Policy applied when deriving net salary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetSalaryPolicy {
    /// Floor the derived net at zero instead of persisting a negative value
    pub clamp_at_zero: bool,
}

impl Default for NetSalaryPolicy {
    fn default() -> Self {
        Self {
            clamp_at_zero: false,
        }
    }
}

/// Parse a decimal-as-text deduction into a non-negative number
pub fn parse_deduction(text: &str) -> RepoResult<f64> {
    let value: f64 = text.trim().parse().map_err(|_| {
        RepoError::Validation(format!("Total deduction is not a valid number: '{text}'"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(RepoError::Validation(format!(
            "Total deduction cannot be negative: {value}"
        )));
    }
    Ok(value)
}

/// Derive net salary from its two inputs under the given policy
pub fn net_salary(gross: f64, deduction: f64, policy: NetSalaryPolicy) -> f64 {
    let net = gross - deduction;
    if policy.clamp_at_zero { net.max(0.0) } else { net }
}
