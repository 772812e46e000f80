pub mod aggregate;
pub mod daily;
pub mod rounding;
pub mod validation;

pub use aggregate::{compute_summary_and_series, working_days};
pub use daily::{compute_daily_balance, compute_worked_minutes};
pub use rounding::round_minutes;
pub use validation::is_valid_punch;
