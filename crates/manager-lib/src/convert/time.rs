//! Timestamp translation
//!
//! The exclusive point of time representation translation between the
//! domain (`chrono::DateTime<Utc>`) and the wire
//! (`prost_types::Timestamp`). No other module formats or parses time.

use chrono::{DateTime, Utc};

use crate::error::ConversionError;

pub fn to_wire(ts: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: ts.timestamp(),
        nanos: ts.timestamp_subsec_nanos() as i32,
    }
}

pub fn to_wire_opt(ts: Option<DateTime<Utc>>) -> Option<prost_types::Timestamp> {
    ts.map(to_wire)
}

pub fn from_wire(ts: &prost_types::Timestamp) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::from_timestamp(ts.seconds, ts.nanos as u32).ok_or_else(|| {
        ConversionError::invalid_field(
            "timestamp",
            format!("seconds={} nanos={} out of range", ts.seconds, ts.nanos),
        )
    })
}

pub fn from_wire_opt(
    ts: Option<&prost_types::Timestamp>,
) -> Result<Option<DateTime<Utc>>, ConversionError> {
    ts.map(from_wire).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 45).unwrap();
        let wire = to_wire(ts);
        assert_eq!(from_wire(&wire).unwrap(), ts);
    }

    #[test]
    fn test_subsecond_precision_preserved() {
        let ts = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let wire = to_wire(ts);
        assert_eq!(wire.nanos, 123_456_789);
        assert_eq!(from_wire(&wire).unwrap(), ts);
    }

    #[test]
    fn test_out_of_range_is_invalid_field() {
        let wire = prost_types::Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        };
        let err = from_wire(&wire).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::InvalidField { field: "timestamp", .. }
        ));
    }

    #[test]
    fn test_optional_absent_passes_through() {
        assert!(to_wire_opt(None).is_none());
        assert_eq!(from_wire_opt(None).unwrap(), None);
    }
}
