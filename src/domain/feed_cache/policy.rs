use chrono::{DateTime, Days, TimeZone};

const MAX_CACHE_AGE_DAYS: u64 = 7;

/// Decides whether a cached snapshot is still fresh enough to be served.
///
/// The retention window is counted in calendar days in the time zone of the
/// timestamp, so a snapshot taken at 09:00 expires at 09:00 wall-clock time
/// N days later even across DST transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedCachePolicy {
    max_cache_age_days: u64,
}

impl FeedCachePolicy {
    pub fn new(max_cache_age_days: u64) -> Self {
        Self { max_cache_age_days }
    }

    pub fn max_cache_age_days(&self) -> u64 {
        self.max_cache_age_days
    }

    /// Returns true when `against` is strictly before `timestamp` plus the
    /// retention window. The boundary instant itself is stale, and a window
    /// end that cannot be represented counts as stale too.
    pub fn validate<Tz: TimeZone>(&self, timestamp: &DateTime<Tz>, against: &DateTime<Tz>) -> bool {
        match timestamp
            .clone()
            .checked_add_days(Days::new(self.max_cache_age_days))
        {
            Some(max_cache_age) => against < &max_cache_age,
            None => false,
        }
    }
}

impl Default for FeedCachePolicy {
    fn default() -> Self {
        Self::new(MAX_CACHE_AGE_DAYS)
    }
}
