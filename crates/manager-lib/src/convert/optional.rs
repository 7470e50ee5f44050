//! Sentinel encoding of optional filter fields
//!
//! The wire schema has no explicit presence for instance filter
//! fields, so absence is encoded with type-specific sentinels. All
//! sentinel choices live here; call sites never inline the constants.

/// Wire value meaning "no filter on the instance ordinal". The wire
/// field is signed and wider than any valid ordinal.
pub const ABSENT_INSTANCE: i64 = -1;

pub fn instance_to_wire(instance: Option<u64>) -> i64 {
    match instance {
        Some(value) => value as i64,
        None => ABSENT_INSTANCE,
    }
}

pub fn instance_from_wire(value: i64) -> Option<u64> {
    (value != ABSENT_INSTANCE).then_some(value as u64)
}

/// Absent strings are encoded as the empty string. A legitimately
/// empty string value is therefore indistinguishable from absence;
/// this is a known representational limitation of the wire schema and
/// is not special-cased further.
pub fn string_to_wire(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn string_from_wire(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_instance_encodes_to_sentinel() {
        assert_eq!(instance_to_wire(None), -1);
    }

    #[test]
    fn test_sentinel_decodes_to_absent() {
        assert_eq!(instance_from_wire(-1), None);
    }

    #[test]
    fn test_zero_ordinal_is_present() {
        assert_eq!(instance_to_wire(Some(0)), 0);
        assert_eq!(instance_from_wire(0), Some(0));
    }

    #[test]
    fn test_instance_round_trip() {
        for value in [Some(0), Some(1), Some(42), None] {
            assert_eq!(instance_from_wire(instance_to_wire(value)), value);
        }
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!(string_from_wire(&string_to_wire(Some("svc"))), Some("svc".to_string()));
        assert_eq!(string_from_wire(&string_to_wire(None)), None);
    }

    #[test]
    fn test_empty_string_decodes_to_absent() {
        // The documented ambiguity: empty and absent collapse.
        assert_eq!(string_from_wire(""), None);
    }
}
