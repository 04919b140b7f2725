use crate::Severity;

use std::str::FromStr;

#[test]
fn test_severity_ordering() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
}

#[test]
fn test_severity_round_trip() {
    for s in [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ] {
        assert_eq!(Severity::from_str(s.as_str()).unwrap(), s);
    }
}

#[test]
fn test_severity_from_str_rejects_unknown() {
    assert!(Severity::from_str("severe").is_err());
}
