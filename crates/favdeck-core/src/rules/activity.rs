use crate::domain::FavoriteRecord;
use crate::time::{hour_label, MILLIS_PER_HOUR};
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

pub const ACTIVITY_WINDOW_HOURS: i64 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourBucket {
    pub hour: String,
    pub count: u32,
}

/// Counts favorites created during the trailing six hours.
///
/// Buckets are labelled by wall-clock hour in `tz`, oldest first. A record is
/// attributed by matching its own hour label against the bucket labels, so a
/// record inside the window whose hour precedes the oldest anchor hour is not
/// counted anywhere.
pub fn hourly_activity<Tz: TimeZone>(
    records: &[FavoriteRecord],
    now_ms: i64,
    tz: &Tz,
) -> Vec<HourBucket> {
    let mut buckets: Vec<HourBucket> = (0..ACTIVITY_WINDOW_HOURS)
        .rev()
        .map(|hours_back| HourBucket {
            hour: hour_label(
                now_ms.saturating_sub(hours_back * MILLIS_PER_HOUR),
                tz,
            ),
            count: 0,
        })
        .collect();

    for record in records {
        let hours_ago = now_ms
            .saturating_sub(record.timestamp)
            .div_euclid(MILLIS_PER_HOUR);
        if !(0..ACTIVITY_WINDOW_HOURS).contains(&hours_ago) {
            continue;
        }

        let label = hour_label(record.timestamp, tz);
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.hour == label) {
            bucket.count += 1;
        }
    }

    buckets
}

pub fn hourly_activity_local(records: &[FavoriteRecord], now_ms: i64) -> Vec<HourBucket> {
    hourly_activity(records, now_ms, &Local)
}
