//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a credential pair failed the check.
///
/// Only one half is ever reported; the username is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialRejection {
    Username,
    Password,
}

impl CredentialRejection {
    /// User-visible notification text for this rejection.
    pub fn message(&self) -> &'static str {
        match self {
            CredentialRejection::Username => "Username is incorrect!",
            CredentialRejection::Password => "Password is incorrect!",
        }
    }
}

impl std::fmt::Display for CredentialRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration in {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    // ─────────────────────────────────────────────────────────────
    // Record Store Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Record store error: {message}")]
    Store { message: String },

    #[error("Failed to load fixtures from {path}: {message}")]
    FixtureLoad { path: PathBuf, message: String },

    // ─────────────────────────────────────────────────────────────
    // User-facing Errors (surface as notifications, never end the session)
    // ─────────────────────────────────────────────────────────────
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("{0}")]
    Credential(CredentialRejection),

    #[error("{file} file upload failed: {reason}")]
    Upload { file: String, reason: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn fixture_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FixtureLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn upload(file: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Upload {
            file: file.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are reported to the user and the session carries on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Validation { .. }
                | Error::Credential(_)
                | Error::Upload { .. }
                | Error::Store { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::ConfigNotFound { .. } | Error::ConfigInvalid { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::store("fixture set is empty");
        assert_eq!(err.to_string(), "Record store error: fixture set is empty");

        let err = Error::Credential(CredentialRejection::Password);
        assert_eq!(err.to_string(), "Password is incorrect!");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_user_facing_errors_are_recoverable() {
        assert!(Error::validation("email", "Please input your email!").is_recoverable());
        assert!(Error::Credential(CredentialRejection::Username).is_recoverable());
        assert!(Error::upload("avatar.png", "unsupported").is_recoverable());
        assert!(!Error::validation("email", "x").is_fatal());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::config_invalid("/tmp/config.toml", "bad").is_fatal());
        assert!(!Error::store("offline").is_fatal());
    }

    #[test]
    fn test_upload_error_names_file() {
        let err = Error::upload("me.bmp", "unsupported image type");
        assert!(err.to_string().contains("me.bmp"));
        assert!(err.to_string().contains("upload failed"));
    }

    #[test]
    fn test_validation_error_displays_message_only() {
        let err = Error::validation("username", "Please input your username!");
        assert_eq!(err.to_string(), "Please input your username!");
    }

    #[test]
    fn test_credential_rejection_messages() {
        assert_eq!(
            CredentialRejection::Username.message(),
            "Username is incorrect!"
        );
        assert_eq!(
            CredentialRejection::Password.message(),
            "Password is incorrect!"
        );
    }
}
