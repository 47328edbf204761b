pub mod activity;
pub mod stats;

pub use activity::{hourly_activity, hourly_activity_local, HourBucket, ACTIVITY_WINDOW_HOURS};
pub use stats::{summarize, ActivitySummary};
