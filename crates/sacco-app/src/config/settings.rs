//! Settings loader for .sacco/config.toml

use super::types::Settings;
use sacco_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const SACCO_DIR: &str = ".sacco";

const DEFAULT_CONFIG: &str = r#"# SACCO Portal Configuration

[auth]
username = "user"
password = "password"

[member]
name = "John Doe"
member_number = "12345"

[dashboard]
credit_limit = 50000      # Split by the financial distribution chart

[store]
# fixtures = "fixtures.json"   # JSON record set; built-in data when unset
latency_ms = 0            # Simulated delay of every record store query

[ui]
sidebar_collapsed = false
notification_ttl_ms = 3000
"#;

/// Path of the implicit config file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(SACCO_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.sacco/config.toml`
///
/// Returns defaults if the file doesn't exist or can't be parsed.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file
///
/// Unlike [`load_settings`], a missing or malformed file is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let settings =
        toml::from_str(&content).map_err(|e| Error::config_invalid(path, e.to_string()))?;
    info!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Create a default config file in the .sacco/ directory
///
/// An existing config file is left untouched. Returns its path either way.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let sacco_dir = base_dir.join(SACCO_DIR);

    if !sacco_dir.exists() {
        std::fs::create_dir_all(&sacco_dir)
            .map_err(|e| Error::config(format!("Failed to create .sacco dir: {}", e)))?;
    }

    let config_path = sacco_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let sacco_dir = temp.path().join(".sacco");
        std::fs::create_dir_all(&sacco_dir).unwrap();

        let config = r#"
[dashboard]
credit_limit = 80000

[store]
latency_ms = 250
"#;
        std::fs::write(sacco_dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.dashboard.credit_limit, 80_000);
        assert_eq!(settings.store.latency_ms, 250);
        assert_eq!(settings.auth.username, "user");
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let sacco_dir = temp.path().join(".sacco");
        std::fs::create_dir_all(&sacco_dir).unwrap();
        std::fs::write(sacco_dir.join("config.toml"), "[ui\nbroken").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_from_missing_file() {
        let temp = tempdir().unwrap();
        let err = load_settings_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_settings_from_invalid_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("portal.toml");
        std::fs::write(&path, "credit_limit = [").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();
        assert!(path.exists());

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let sacco_dir = temp.path().join(".sacco");
        std::fs::create_dir_all(&sacco_dir).unwrap();
        std::fs::write(sacco_dir.join("config.toml"), "[ui]\nsidebar_collapsed = true\n").unwrap();

        init_config_dir(temp.path()).unwrap();
        assert!(load_settings(temp.path()).ui.sidebar_collapsed);
    }
}
