//! Wire format for persisted timestamps: `YYYY-MM-DD HH:MM:SS` in UTC.
//!
//! The literal format sorts lexicographically in the same order as the
//! instants it represents, so clients may compare the strings directly.
//! Use through `#[serde(serialize_with = "...")]` on [`Timestamp`] fields.

use chrono::{SubsecRound, Utc};
use serde::Serializer;

use crate::types::Timestamp;

/// `strftime` pattern for the wire format.
pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp in the wire format.
pub fn format(ts: &Timestamp) -> String {
    ts.format(FORMAT).to_string()
}

/// The current instant truncated to whole seconds, so that the stored
/// value equals what the wire format can express.
pub fn now_seconds() -> Timestamp {
    Utc::now().trunc_subsecs(0)
}

pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(ts))
}

/// Same wire format for nullable columns.
pub fn serialize_option<S: Serializer>(
    ts: &Option<Timestamp>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serializer.serialize_some(&format(ts)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Row {
        #[serde(serialize_with = "crate::timestamp::serialize")]
        created_at: Timestamp,
        #[serde(serialize_with = "crate::timestamp::serialize_option")]
        updated_at: Option<Timestamp>,
    }

    #[test]
    fn formats_with_zero_padding() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 3, 4, 9).unwrap();
        assert_eq!(format(&ts), "2024-01-05 03:04:09");
    }

    #[test]
    fn drops_fractional_seconds() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 23, 22, 43, 20).unwrap()
            + chrono::Duration::milliseconds(987);
        assert_eq!(format(&ts), "2024-01-23 22:43:20");
    }

    #[test]
    fn lexicographic_order_matches_chronological() {
        let earlier = Utc.with_ymd_and_hms(2024, 9, 30, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
        assert!(format(&earlier) < format(&later));
    }

    #[test]
    fn now_seconds_has_no_subsecond_part() {
        assert_eq!(now_seconds().timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn serde_field_attributes() {
        let row = Row {
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
            updated_at: Some(Utc.with_ymd_and_hms(2024, 2, 2, 9, 30, 0).unwrap()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["created_at"], "2024-02-01 08:00:00");
        assert_eq!(json["updated_at"], "2024-02-02 09:30:00");

        let row = Row {
            updated_at: None,
            ..row
        };
        assert!(serde_json::to_value(&row).unwrap()["updated_at"].is_null());
    }
}
