pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod log;
pub mod period;
pub mod summary;
