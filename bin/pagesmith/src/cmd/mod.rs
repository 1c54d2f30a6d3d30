//! CLI command implementations.

pub mod check;
pub mod generate;
pub mod keywords;
pub mod new;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use pagesmith_core::{Batch, Config};

/// Load the configuration, falling back to defaults when the file is absent.
///
/// `PAGESMITH__SECTION__NAME`-style environment variables override values
/// from an existing file.
pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    let config = if config_path.exists() {
        Config::load_with_env(config_path)
    } else {
        Config::load_or_default(config_path)
    };
    config.wrap_err("Failed to load configuration")
}

/// Load and concatenate batch files.
pub(crate) fn load_batches(paths: &[PathBuf]) -> Result<Batch> {
    let batch = Batch::load_all(paths).wrap_err("Failed to load batch files")?;
    tracing::debug!(pages = batch.len(), "Loaded batches");
    Ok(batch)
}
