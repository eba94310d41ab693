//! Configuration file parsing for the SACCO portal
//!
//! Supports `.sacco/config.toml` under the working directory, or an explicit
//! file passed with `--config`.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, load_settings_from};
pub use types::*;
