use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};

/// Monotonic clock that also works inside the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;

    /// Sample labels on price charts, e.g. "14:35".
    pub const CLOCK_FORMAT: &str = "%H:%M";
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

pub fn now_timestamp_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn clock_label(at: &DateTime<Local>) -> String {
    at.format(TimeUtils::CLOCK_FORMAT).to_string()
}

/// Parse a string-encoded epoch-millis timestamp as used by the lending records.
pub fn parse_epoch_ms(ts: &str) -> Result<i64> {
    ts.trim()
        .parse::<i64>()
        .with_context(|| format!("invalid epoch-millis timestamp {:?}", ts))
}

fn epoch_ms_to_local(epoch_ms: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .with_context(|| format!("timestamp {} out of range", epoch_ms))
}

pub fn epoch_ms_to_date_string(epoch_ms: i64) -> Result<String> {
    Ok(epoch_ms_to_local(epoch_ms)?
        .format(TimeUtils::DATE_FORMAT)
        .to_string())
}

pub fn epoch_ms_to_date_time_string(epoch_ms: i64) -> Result<String> {
    Ok(epoch_ms_to_local(epoch_ms)?
        .format(TimeUtils::DATE_TIME_FORMAT)
        .to_string())
}

/// Coarse age label such as "5m" or "2d". Negative spans read as "0s".
pub fn format_duration(ms: i64) -> String {
    let ms = ms.max(0);
    if ms < TimeUtils::MS_IN_MIN {
        format!("{}s", ms / TimeUtils::MS_IN_S)
    } else if ms < TimeUtils::MS_IN_H {
        format!("{}m", ms / TimeUtils::MS_IN_MIN)
    } else if ms < TimeUtils::MS_IN_D {
        format!("{}h", ms / TimeUtils::MS_IN_H)
    } else {
        format!("{}d", ms / TimeUtils::MS_IN_D)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lending_timestamps() {
        assert_eq!(parse_epoch_ms("1646438400000").unwrap(), 1_646_438_400_000);
        assert_eq!(parse_epoch_ms(" 42 ").unwrap(), 42);
        assert!(parse_epoch_ms("yesterday").is_err());
    }

    #[test]
    fn clock_label_is_hours_and_minutes() {
        let at = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 59).unwrap();
        assert_eq!(clock_label(&at), "09:05");
    }

    #[test]
    fn date_strings_round_trip_through_local_time() {
        let at = Local.with_ymd_and_hms(2022, 3, 5, 12, 0, 0).unwrap();
        let ms = at.timestamp_millis();
        assert_eq!(epoch_ms_to_date_string(ms).unwrap(), "2022-03-05");
        assert_eq!(
            epoch_ms_to_date_time_string(ms).unwrap(),
            "2022-03-05 12:00:00"
        );
    }

    #[test]
    fn durations_pick_the_largest_unit() {
        assert_eq!(format_duration(999), "0s");
        assert_eq!(format_duration(-5), "0s");
        assert_eq!(format_duration(5 * TimeUtils::MS_IN_S), "5s");
        assert_eq!(format_duration(5 * TimeUtils::MS_IN_MIN), "5m");
        assert_eq!(format_duration(3 * TimeUtils::MS_IN_H), "3h");
        assert_eq!(format_duration(2 * TimeUtils::MS_IN_D), "2d");
    }
}
