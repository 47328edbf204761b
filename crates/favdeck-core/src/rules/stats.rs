use crate::rules::activity::HourBucket;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub total_favorites: usize,
    pub recent_activity: u32,
    pub peak_hour_count: u32,
    pub average_per_week: usize,
}

pub fn summarize(total_favorites: usize, buckets: &[HourBucket]) -> ActivitySummary {
    ActivitySummary {
        total_favorites,
        recent_activity: buckets.iter().map(|bucket| bucket.count).sum(),
        peak_hour_count: buckets
            .iter()
            .map(|bucket| bucket.count)
            .max()
            .unwrap_or(0),
        average_per_week: total_favorites.div_ceil(7),
    }
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::rules::activity::HourBucket;

    fn bucket(hour: &str, count: u32) -> HourBucket {
        HourBucket {
            hour: hour.to_string(),
            count,
        }
    }

    #[test]
    fn summarize_empty() {
        let summary = summarize(0, &[]);
        assert_eq!(summary.recent_activity, 0);
        assert_eq!(summary.peak_hour_count, 0);
        assert_eq!(summary.average_per_week, 0);
    }

    #[test]
    fn summarize_counts_and_rounds_up() {
        let buckets = vec![bucket("08:00", 1), bucket("09:00", 3), bucket("10:00", 0)];
        let summary = summarize(8, &buckets);
        assert_eq!(summary.total_favorites, 8);
        assert_eq!(summary.recent_activity, 4);
        assert_eq!(summary.peak_hour_count, 3);
        assert_eq!(summary.average_per_week, 2);
    }
}
