//! SACCO member portal
//!
//! Entry points behind the `sacco` binary: the interactive terminal portal,
//! headless dashboard statistics and config scaffolding.

use std::path::{Path, PathBuf};

use sacco_app::config::{self, Settings};
use sacco_app::LocalServices;
use sacco_core::prelude::*;
use sacco_core::DashboardStats;
use sacco_store::fetch_dashboard;

/// Settings from an explicit `--config` file, or `<base>/.sacco/config.toml`
pub fn resolve_settings(base_dir: &Path, config_file: Option<&Path>) -> Result<Settings> {
    match config_file {
        Some(path) => config::load_settings_from(path),
        None => Ok(config::load_settings(base_dir)),
    }
}

/// Run the interactive portal
pub async fn run(base_dir: &Path, config_file: Option<&Path>) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the terminal belongs to the TUI
    sacco_core::logging::init()?;

    let settings = resolve_settings(base_dir, config_file)?;
    let services = LocalServices::from_settings(&settings, base_dir)?;
    tracing::info!("Base directory: {}", base_dir.display());

    let result = sacco_tui::run(settings, services).await;
    if let Err(ref e) = result {
        tracing::error!("Application error: {:?}", e);
    }

    tracing::info!("SACCO portal exiting");
    result
}

/// Aggregate the dashboard statistics of the configured store
pub async fn dashboard_stats(base_dir: &Path, config_file: Option<&Path>) -> Result<DashboardStats> {
    let settings = resolve_settings(base_dir, config_file)?;
    let services = LocalServices::from_settings(&settings, base_dir)?;
    let snapshot = fetch_dashboard(services.store.as_ref()).await?;
    Ok(snapshot.stats())
}

/// Write a default config file under `base_dir`
pub fn init_config(base_dir: &Path) -> Result<PathBuf> {
    config::init_config_dir(base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dashboard_stats_from_builtin_fixtures() {
        let dir = tempfile::tempdir().unwrap();
        let stats = dashboard_stats(dir.path(), None).await.unwrap();
        assert_eq!(stats.total_loan_amount, 25_000);
        assert_eq!(stats.total_pending_amount, 18_000);
        assert_eq!(stats.active_loan_count, 3);
        assert_eq!(stats.pending_application_count, 2);
    }

    #[tokio::test]
    async fn test_dashboard_stats_from_fixture_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("fixtures.json"),
            r#"{"activeLoans": [], "applications": []}"#,
        )
        .unwrap();
        let config_file = dir.path().join("portal.toml");
        std::fs::write(&config_file, "[store]\nfixtures = \"fixtures.json\"\n").unwrap();

        let stats = dashboard_stats(dir.path(), Some(&config_file)).await.unwrap();
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            resolve_settings(dir.path(), Some(&missing)),
            Err(Error::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_init_config_then_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = init_config(dir.path()).unwrap();
        assert!(path.exists());

        let settings = resolve_settings(dir.path(), None).unwrap();
        assert_eq!(settings.dashboard.credit_limit, 50_000);
    }
}
