pub mod period;
pub mod punch;
pub mod summary;
pub mod work_config;
