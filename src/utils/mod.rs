mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{RollingWindow, sample_mean_and_stddev};
pub use time_utils::{
    TimeUtils, following_calendar_days, format_date, lookback_start, parse_leading_date,
    today_local,
};

pub(crate) use maths_utils::{get_max, get_min};
