use std::str::FromStr;

use chrono::Utc;
use chrono_tz::Tz;

use crate::core::error::{TimeServiceError, TimeServiceResult};
use crate::core::models::TimeSnapshot;

/// Exact lookup of an IANA timezone name
pub fn lookup_timezone(name: &str) -> TimeServiceResult<Tz> {
    Tz::from_str(name).map_err(|_| TimeServiceError::UnknownTimezone {
        timezone: name.to_string(),
    })
}

/// Resolve a raw identifier from the URL path into a valid timezone.
///
/// The raw form is tried first so canonical names containing literal
/// underscores (`America/New_York`) resolve to themselves. A second attempt
/// undoes the `_`-for-`/` client encoding used when the identifier cannot be
/// expressed with slashes. Anything still unknown falls back to UTC; a
/// failed lookup is never surfaced to the caller.
pub fn resolve_timezone(raw: &str) -> Tz {
    if let Ok(tz) = lookup_timezone(raw) {
        return tz;
    }

    match lookup_timezone(&raw.replace('_', "/")) {
        Ok(tz) => tz,
        Err(_) => {
            tracing::debug!("Unknown timezone '{}', defaulting to UTC", raw);
            Tz::UTC
        }
    }
}

/// Resolve `raw` and capture the current instant in that timezone
pub fn current_snapshot(raw: &str) -> TimeSnapshot {
    TimeSnapshot::from_instant(Utc::now(), resolve_timezone(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_valid_timezone() {
        let tz = lookup_timezone("Europe/London").unwrap();
        assert_eq!(tz, Tz::Europe__London);
    }

    #[test]
    fn test_lookup_unknown_timezone_fails() {
        let error = lookup_timezone("Invalid/Zone").unwrap_err();
        assert_eq!(error.to_string(), "Unknown timezone: Invalid/Zone");
    }

    #[test]
    fn test_resolve_canonical_name_with_literal_underscore() {
        assert_eq!(resolve_timezone("America/New_York"), Tz::America__New_York);
    }

    #[test]
    fn test_resolve_underscore_encoded_separator() {
        assert_eq!(resolve_timezone("Asia_Tokyo"), Tz::Asia__Tokyo);
        assert_eq!(resolve_timezone("Europe_London"), Tz::Europe__London);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_utc() {
        assert_eq!(resolve_timezone("Not_A_Real_Zone"), Tz::UTC);
        assert_eq!(resolve_timezone(""), Tz::UTC);
    }

    #[test]
    fn test_current_snapshot_labels_resolved_timezone() {
        let snapshot = current_snapshot("UTC");
        assert_eq!(snapshot.timezone, "UTC");
        assert!(snapshot.current_datetime.ends_with("+00:00"));
        assert!(snapshot.current_timestamp_utc > 0.0);
    }

    #[test]
    fn test_current_snapshot_absorbs_invalid_input() {
        let snapshot = current_snapshot("Not_A_Real_Zone");
        assert_eq!(snapshot.timezone, "UTC");
    }
}
