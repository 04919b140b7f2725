use crate::Role;

use serde::{Deserialize, Serialize};

/// A registered account. Unique by email within the user directory.
/// Records are append-only: never updated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Role-prefixed identifier (e.g., "ADM001"). Not guaranteed unique.
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub organization_id: Option<String>,
}

impl User {
    pub fn new(
        id: String,
        name: String,
        email: String,
        phone: String,
        role: Role,
        organization_id: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            role,
            organization_id,
        }
    }
}
