use serde::{Deserialize, Serialize};

use super::new_id;

/// Id given to every user signed in through the mocked login flow.
pub const MOCK_LOGIN_USER_ID: &str = "1";

/// User entity - the signed-in identity of a session.
///
/// No password is ever stored: sign-in is mocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Create a newly registered user with a generated id.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            username: username.into(),
            email: email.into(),
        }
    }

    /// Fabricate the user returned by a mocked login.
    ///
    /// The username is the local part of the email address.
    pub fn from_login(email: &str) -> Self {
        Self {
            id: MOCK_LOGIN_USER_ID.to_string(),
            username: username_from_email(email).to_string(),
            email: email.to_string(),
        }
    }
}

fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
