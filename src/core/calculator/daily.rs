//! Worked minutes and balance for a single day.

use crate::errors::AppResult;
use crate::utils::time::time_to_minutes;

/// Morning segment plus afternoon segment, lunch excluded.
///
/// No ordering checks: callers pass records that already passed
/// validation. A malformed time fails the call with `InvalidTime`.
pub fn compute_worked_minutes(
    entry: &str,
    lunch_out: &str,
    lunch_in: &str,
    exit: &str,
) -> AppResult<i64> {
    let e = time_to_minutes(entry)?;
    let lo = time_to_minutes(lunch_out)?;
    let li = time_to_minutes(lunch_in)?;
    let x = time_to_minutes(exit)?;

    Ok((lo - e) + (x - li))
}

pub fn compute_daily_balance(worked_minutes: i64, expected_minutes: i64) -> i64 {
    worked_minutes - expected_minutes
}
