use crate::SessionRecord;
use crate::models::session_record::SESSION_SCHEMA_VERSION;

#[test]
fn test_session_record_new_sets_schema_version() {
    let record = SessionRecord::new("ADM001".to_string(), "admin@example.com".to_string());
    assert_eq!(record.schema_version, SESSION_SCHEMA_VERSION);
    assert_eq!(record.user_id, "ADM001");
    assert_eq!(record.user_email, "admin@example.com");
}

#[test]
fn test_session_record_ids_are_unique_per_session() {
    let a = SessionRecord::new("CIT001".to_string(), "citizen@example.com".to_string());
    let b = SessionRecord::new("CIT001".to_string(), "citizen@example.com".to_string());
    assert_ne!(a.session_id, b.session_id);
}

#[test]
fn test_session_record_serde_round_trip() {
    let original = SessionRecord::new("NGO001".to_string(), "ngo@example.com".to_string());
    let json = serde_json::to_string(&original).unwrap();
    let restored: SessionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}
