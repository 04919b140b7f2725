use crate::Role;

use std::str::FromStr;

#[test]
fn test_role_as_str_round_trip() {
    for role in [Role::Admin, Role::Donor, Role::Ngo, Role::Citizen] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}

#[test]
fn test_role_from_str_rejects_unknown() {
    assert!(Role::from_str("superuser").is_err());
    assert!(Role::from_str("Admin").is_err()); // exact-string matching only
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_id_prefix() {
    assert_eq!(Role::Admin.id_prefix(), "ADM");
    assert_eq!(Role::Donor.id_prefix(), "DON");
    assert_eq!(Role::Ngo.id_prefix(), "NGO");
    assert_eq!(Role::Citizen.id_prefix(), "CIT");
}

#[test]
fn test_role_privileged() {
    assert!(Role::Admin.is_privileged());
    assert!(Role::Ngo.is_privileged());
    assert!(!Role::Donor.is_privileged());
    assert!(!Role::Citizen.is_privileged());
}

#[test]
fn test_role_serde_uses_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Ngo).unwrap(), "\"ngo\"");
    let role: Role = serde_json::from_str("\"citizen\"").unwrap();
    assert_eq!(role, Role::Citizen);
}
