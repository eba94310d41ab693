//! Credential check for the login surface
//!
//! Exactly one username and one password are accepted. The check is pure;
//! callers apply the resulting session transition.

use crate::error::{CredentialRejection, Error, Result};

/// Outcome of comparing submitted credentials with the configured pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    Accepted,
    RejectedUsername,
    RejectedPassword,
}

impl CredentialCheck {
    pub fn is_accepted(&self) -> bool {
        matches!(self, CredentialCheck::Accepted)
    }

    /// Convert into the error taxonomy, `Ok(())` when accepted.
    pub fn into_result(self) -> Result<()> {
        match self {
            CredentialCheck::Accepted => Ok(()),
            CredentialCheck::RejectedUsername => {
                Err(Error::Credential(CredentialRejection::Username))
            }
            CredentialCheck::RejectedPassword => {
                Err(Error::Credential(CredentialRejection::Password))
            }
        }
    }
}

/// The single valid username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Compare a submitted pair against the configured one.
    ///
    /// The username is checked first, so a pair that is wrong on both halves
    /// reports `RejectedUsername` only.
    pub fn check(&self, username: &str, password: &str) -> CredentialCheck {
        if username != self.username {
            CredentialCheck::RejectedUsername
        } else if password != self.password {
            CredentialCheck::RejectedPassword
        } else {
            CredentialCheck::Accepted
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("user", "password")
    }
}

// Password stays out of logs and panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
