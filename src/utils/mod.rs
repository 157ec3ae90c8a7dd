mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{
    AppInstant, TimeUtils, clock_label, epoch_ms_to_date_string, epoch_ms_to_date_time_string,
    format_duration, now_timestamp_ms, parse_epoch_ms,
};

pub(crate) use maths_utils::{padded_bounds, percent_change};
