//! CLI subcommands.

use std::path::Path;

use halscan_core::models::config::ScanConfig;

pub mod config;
pub mod lookup;
pub mod parse;
pub mod scan;

/// Load configuration from an explicit path, the default location, or
/// built-in defaults, in that order.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ScanConfig> {
    if let Some(path) = config_path {
        return Ok(ScanConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(ScanConfig::from_file(&default_path)?)
    } else {
        Ok(ScanConfig::default())
    }
}
