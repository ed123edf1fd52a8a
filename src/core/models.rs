use serde::{Deserialize, Serialize};

/// One row of the `User` table as returned to callers. Columns written as
/// NULL by other clients come back as JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: Option<String>,
    // Stored and returned in plaintext.
    pub password: Option<String>,
}

/// Credentials decoded from a POST body. Values are kept exactly as sent;
/// trimming only decides whether the insert happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

impl NewUser {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        Self {
            email: Some(new_user.email),
            password: Some(new_user.password),
        }
    }
}
