//! Chronological validation of a candidate punch record.

use crate::errors::AppResult;
use crate::models::punch::PunchTimes;
use crate::utils::time::time_to_minutes;

fn parse_all(times: &PunchTimes) -> AppResult<[i64; 4]> {
    Ok([
        time_to_minutes(&times.entry)?,
        time_to_minutes(&times.lunch_out)?,
        time_to_minutes(&times.lunch_in)?,
        time_to_minutes(&times.exit)?,
    ])
}

/// `entry < lunch_out <= lunch_in < exit`.
///
/// A zero-length lunch is accepted. Unparseable times make the record
/// invalid; this never returns an error.
pub fn is_valid_punch(times: &PunchTimes) -> bool {
    match parse_all(times) {
        Ok([e, lo, li, x]) => e < lo && lo <= li && li < x,
        Err(_) => false,
    }
}
