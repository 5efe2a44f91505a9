use crate::model::FreshnessStatus;
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Days within which a product counts as expiring soon.
pub const WARNING_WINDOW_DAYS: i64 = 7;

/// Signed number of days until expiry, rounded with a day ceiling.
///
/// An expiry 1 second from now counts as 1 day; an expiry 1 second ago
/// counts as 0 days (still `warning`, not yet `expired`).
pub fn days_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let seconds = (expiry - now).num_seconds();
    (seconds + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY)
}

/// Classify freshness from the expiry date and the current time.
///
/// Stateless and total; must be re-evaluated on every read since "now"
/// moves continuously. Never cache the result beyond a single response.
pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> FreshnessStatus {
    let days = days_until(expiry, now);
    if days < 0 {
        FreshnessStatus::Expired
    } else if days <= WARNING_WINDOW_DAYS {
        FreshnessStatus::Warning
    } else {
        FreshnessStatus::Fresh
    }
}
