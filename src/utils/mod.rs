pub mod app_time;
pub mod time_utils;

pub use app_time::{Clock, SystemClock};
pub use time_utils::TimeUtils;
