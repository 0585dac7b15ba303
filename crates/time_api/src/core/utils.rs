use chrono::{DateTime, Utc};

/// ISO 8601 with microseconds and UTC offset, e.g. `2024-01-01T12:00:00.000000+00:00`
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

/// Seconds since the Unix epoch as a float with sub-second precision
///
/// # Arguments
///
/// * `instant` - The UTC instant to convert
///
/// # Returns
///
/// Epoch seconds at microsecond precision
pub fn epoch_seconds(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_micros() as f64 / 1_000_000.0
}
