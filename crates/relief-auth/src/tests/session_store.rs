use crate::tests::seeded_store;
use crate::{AuthError, SignupRequest};

use relief_core::Role;
use tempfile::TempDir;

fn signup_request(email: &str, role: Role) -> SignupRequest {
    SignupRequest {
        name: "New Person".to_string(),
        email: email.to_string(),
        phone: "+1-555-0199".to_string(),
        password: "Secret1".to_string(),
        role,
        organization_id: None,
    }
}

// =========================================================================
// login
// =========================================================================

#[test]
fn given_seeded_accounts_when_login_with_correct_password_then_session_matches() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let cases = [
        ("admin@example.com", Some("ADM001")),
        ("donor@example.com", None),
        ("ngo@example.com", Some("NGO001")),
        ("citizen@example.com", None),
    ];

    for (email, supplementary_id) in cases {
        let user = store.login(email, "Pass123", supplementary_id).unwrap();
        assert_eq!(user.email, email);
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().email, email);
    }
}

#[test]
fn given_wrong_password_when_login_then_bad_password_and_session_unchanged() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let result = store.login("donor@example.com", "wrong", None);

    assert!(matches!(result, Err(AuthError::BadPassword { .. })));
    assert!(!store.is_authenticated());
}

#[test]
fn given_active_session_when_login_fails_then_previous_session_survives() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());
    store.login("citizen@example.com", "Pass123", None).unwrap();

    let result = store.login("donor@example.com", "wrong", None);

    assert!(result.is_err());
    assert_eq!(store.current_user().unwrap().email, "citizen@example.com");
}

#[test]
fn given_unknown_email_when_login_then_unknown_email() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let result = store.login("nobody@example.com", "Pass123", None);

    assert!(matches!(
        result,
        Err(AuthError::UnknownEmail { ref email, .. }) if email == "nobody@example.com"
    ));
}

#[test]
fn given_email_case_differs_when_login_then_unknown_email() {
    // Exact-string matching throughout; no case folding.
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let result = store.login("Donor@Example.com", "Pass123", None);

    assert!(matches!(result, Err(AuthError::UnknownEmail { .. })));
}

// =========================================================================
// login - supplementary identifier
// =========================================================================

#[test]
fn given_admin_with_wrong_id_when_login_then_bad_supplementary_id() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let result = store.login("admin@example.com", "Pass123", Some("ADM999"));

    assert!(matches!(result, Err(AuthError::BadSupplementaryId { .. })));
    assert!(!store.is_authenticated());
}

#[test]
fn given_admin_without_id_when_login_then_bad_supplementary_id() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let result = store.login("admin@example.com", "Pass123", None);

    assert!(matches!(result, Err(AuthError::BadSupplementaryId { .. })));
}

#[test]
fn given_ngo_with_correct_id_when_login_then_success() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let user = store
        .login("ngo@example.com", "Pass123", Some("NGO001"))
        .unwrap();

    assert_eq!(user.role, Role::Ngo);
}

#[test]
fn given_donor_with_stray_id_when_login_then_id_is_ignored() {
    // Donor credential entries carry no supplementary id, so none is checked.
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let user = store
        .login("donor@example.com", "Pass123", Some("WHATEVER"))
        .unwrap();

    assert_eq!(user.role, Role::Donor);
}

// =========================================================================
// signup
// =========================================================================

#[test]
fn given_novel_email_when_signup_then_directory_grows_and_session_set() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());
    let before = store.users().len();

    let user = store
        .signup(signup_request("fresh@example.com", Role::Citizen))
        .unwrap();

    assert_eq!(store.users().len(), before + 1);
    assert_eq!(store.current_user().unwrap().email, "fresh@example.com");
    assert!(user.id.starts_with("CIT"));
    assert_eq!(user.id.len(), 6);
    assert!(user.id[3..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn given_duplicate_email_when_signup_then_duplicate_email_and_nothing_changes() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());
    let before = store.users().len();

    let result = store.signup(signup_request("citizen@example.com", Role::Citizen));

    assert!(matches!(result, Err(AuthError::DuplicateEmail { .. })));
    assert_eq!(store.users().len(), before);
    assert!(!store.is_authenticated());
}

#[test]
fn given_ngo_signup_when_id_generated_then_role_prefix_applies() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    let mut request = signup_request("neworg@example.com", Role::Ngo);
    request.organization_id = Some("NGO777".to_string());
    let user = store.signup(request).unwrap();

    assert!(user.id.starts_with("NGO"));
    assert_eq!(user.organization_id.as_deref(), Some("NGO777"));
}

// =========================================================================
// logout
// =========================================================================

#[test]
fn given_active_session_when_logout_then_anonymous_and_file_removed() {
    let temp = TempDir::new().unwrap();
    let session_path = temp.path().join("session.json");
    let mut store = seeded_store(temp.path());
    store.login("citizen@example.com", "Pass123", None).unwrap();
    assert!(session_path.exists());

    store.logout().unwrap();

    assert!(!store.is_authenticated());
    assert!(store.current_user().is_none());
    assert!(!session_path.exists());
}

#[test]
fn given_no_session_when_logout_twice_then_no_error() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    store.logout().unwrap();
    store.logout().unwrap();

    assert!(!store.is_authenticated());
}

// =========================================================================
// restore
// =========================================================================

#[test]
fn given_persisted_session_when_restore_then_user_round_trips() {
    let temp = TempDir::new().unwrap();
    let mut first = seeded_store(temp.path());
    let logged_in = first
        .login("ngo@example.com", "Pass123", Some("NGO001"))
        .unwrap();

    // Fresh store over the same seed directories simulates a restart.
    let mut second = seeded_store(temp.path());
    let restored = second.restore().unwrap();

    assert!(restored);
    assert_eq!(second.current_user().unwrap(), &logged_in);
}

#[test]
fn given_no_session_file_when_restore_then_anonymous() {
    let temp = TempDir::new().unwrap();
    let mut store = seeded_store(temp.path());

    assert!(!store.restore().unwrap());
    assert!(!store.is_authenticated());
}

#[test]
fn given_corrupted_session_file_when_restore_then_backed_up_and_anonymous() {
    let temp = TempDir::new().unwrap();
    let session_path = temp.path().join("session.json");
    std::fs::write(&session_path, "{not json").unwrap();
    let mut store = seeded_store(temp.path());

    assert!(!store.restore().unwrap());
    assert!(!store.is_authenticated());
    // Original moved aside for debugging.
    assert!(!session_path.exists());
    let backups: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("corrupted"))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn given_session_for_unregistered_user_when_restore_then_stale_record_discarded() {
    let temp = TempDir::new().unwrap();
    let session_path = temp.path().join("session.json");

    // Sign up in one process; the next process re-seeds the directory and
    // no longer knows this user.
    let mut first = seeded_store(temp.path());
    first
        .signup(SignupRequest {
            name: "Ephemeral".to_string(),
            email: "ephemeral@example.com".to_string(),
            phone: "+1-555-0000".to_string(),
            password: "Secret1".to_string(),
            role: Role::Citizen,
            organization_id: None,
        })
        .unwrap();
    assert!(session_path.exists());

    let mut second = seeded_store(temp.path());
    let restored = second.restore().unwrap();

    assert!(!restored);
    assert!(!second.is_authenticated());
    assert!(!session_path.exists());
}
