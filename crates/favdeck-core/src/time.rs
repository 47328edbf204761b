use chrono::{DateTime, Local, TimeZone, Timelike, Utc};

pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

// Out-of-range instants collapse to the epoch instead of panicking.
pub fn to_zone<Tz: TimeZone>(ts_ms: i64, tz: &Tz) -> DateTime<Tz> {
    DateTime::<Utc>::from_timestamp_millis(ts_ms)
        .unwrap_or_default()
        .with_timezone(tz)
}

pub fn hour_label<Tz: TimeZone>(ts_ms: i64, tz: &Tz) -> String {
    format!("{:02}:00", to_zone(ts_ms, tz).hour())
}

pub fn format_timestamp_datetime(ts_ms: i64) -> String {
    to_zone(ts_ms, &Local).format("%Y-%m-%d %H:%M").to_string()
}
