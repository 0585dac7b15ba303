use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::core::utils::{DATETIME_FORMAT, epoch_seconds};

/// Current time information for a resolved timezone
#[derive(Debug, Clone, Serialize)]
pub struct TimeSnapshot {
    /// Canonical IANA timezone name
    pub timezone: String,
    /// ISO 8601 local datetime string with UTC offset
    pub current_datetime: String,
    /// Seconds since the Unix epoch, with sub-second precision
    pub current_timestamp_utc: f64,
}

impl TimeSnapshot {
    /// Create a TimeSnapshot from a single UTC instant projected into `timezone`
    pub fn from_instant(instant: DateTime<Utc>, timezone: Tz) -> TimeSnapshot {
        let local = instant.with_timezone(&timezone);

        TimeSnapshot {
            timezone: timezone.name().to_string(),
            current_datetime: local.format(DATETIME_FORMAT).to_string(),
            current_timestamp_utc: epoch_seconds(instant),
        }
    }
}

/// Static instructional payload served on the default route
#[derive(Debug, Clone, Serialize)]
pub struct UsageResponse {
    /// Short description of the API
    pub message: &'static str,
    /// How to request the time for a specific timezone
    pub usage: &'static str,
}
