//! Command implementations.

pub mod check;
pub mod index;
pub mod page;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use marquee_core::Config;

/// Load the content file, with `MARQUEE__*` environment overrides.
pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    let config = Config::load_with_env(config_path)
        .wrap_err_with(|| format!("Failed to load content from {}", config_path.display()))?;
    tracing::debug!(?config, "Loaded content");
    Ok(config)
}
