//! Configuration types for the SACCO portal
//!
//! Defines `Settings` and one struct per `config.toml` section. Every field
//! has a default so a partial file is always valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use sacco_core::{Credentials, MemberProfile};

/// Global application settings from `.sacco/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub member: MemberSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// The username/password pair accepted by the login surface
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default = "default_username")]
    pub username: String,

    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

impl AuthSettings {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn default_username() -> String {
    "user".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

/// Member shown in the dashboard greeting
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemberSettings {
    #[serde(default = "default_member_name")]
    pub name: String,

    #[serde(default = "default_member_number")]
    pub member_number: String,
}

impl Default for MemberSettings {
    fn default() -> Self {
        Self {
            name: default_member_name(),
            member_number: default_member_number(),
        }
    }
}

impl MemberSettings {
    pub fn profile(&self) -> MemberProfile {
        MemberProfile {
            name: self.name.clone(),
            member_number: self.member_number.clone(),
        }
    }
}

fn default_member_name() -> String {
    MemberProfile::default().name
}

fn default_member_number() -> String {
    MemberProfile::default().member_number
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DashboardSettings {
    /// Credit limit split by the financial distribution chart
    #[serde(default = "default_credit_limit")]
    pub credit_limit: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            credit_limit: default_credit_limit(),
        }
    }
}

fn default_credit_limit() -> u64 {
    50_000
}

/// Record store backend settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreSettings {
    /// JSON fixture file; built-in data when unset
    #[serde(default)]
    pub fixtures: Option<PathBuf>,

    /// Simulated latency of every store query
    #[serde(default)]
    pub latency_ms: u64,
}

impl StoreSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Start with the sidebar collapsed
    #[serde(default)]
    pub sidebar_collapsed: bool,

    /// How long a notification stays on screen
    #[serde(default = "default_notification_ttl_ms")]
    pub notification_ttl_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            notification_ttl_ms: default_notification_ttl_ms(),
        }
    }
}

impl UiSettings {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

fn default_notification_ttl_ms() -> u64 {
    3_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.auth.username, "user");
        assert_eq!(settings.auth.password, "password");
        assert_eq!(settings.member.name, "John Doe");
        assert_eq!(settings.dashboard.credit_limit, 50_000);
        assert!(settings.store.fixtures.is_none());
        assert_eq!(settings.store.latency(), Duration::ZERO);
        assert!(!settings.ui.sidebar_collapsed);
        assert_eq!(settings.ui.notification_ttl(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[auth]
username = "member"

[ui]
sidebar_collapsed = true
"#,
        )
        .unwrap();

        assert_eq!(settings.auth.username, "member");
        assert_eq!(settings.auth.password, "password");
        assert!(settings.ui.sidebar_collapsed);
        assert_eq!(settings.ui.notification_ttl_ms, 3_000);
    }

    #[test]
    fn test_auth_debug_redacts_password() {
        let auth = AuthSettings {
            username: "user".into(),
            password: "topsecret".into(),
        };
        assert!(!format!("{:?}", auth).contains("topsecret"));
        assert!(auth.credentials().check("user", "topsecret").is_accepted());
    }
}
