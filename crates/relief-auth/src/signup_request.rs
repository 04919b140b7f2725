use relief_core::Role;

/// Fields captured by the signup form.
///
/// The password is accepted to mirror the form contract but is not
/// retained: the credential table is a fixed seed and signup does not
/// extend it.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
    pub organization_id: Option<String>,
}
