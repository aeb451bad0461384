//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Unix timestamp in whole seconds.
///
/// OAuth 1.0a `oauth_timestamp` is expressed this way.
pub fn unix_seconds(t: DateTime) -> i64 {
    t.timestamp()
}
