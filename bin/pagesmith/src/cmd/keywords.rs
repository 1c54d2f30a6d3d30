//! Keywords command - write the page and keyword report

use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Result, WrapErr};
use pagesmith_generator::keyword_report;

use super::{load_batches, load_config};

/// Run the keywords command.
///
/// Prints the report to stdout unless `out` is given.
pub fn run(config_path: &Path, batches: &[PathBuf], out: Option<&Path>) -> Result<()> {
    tracing::info!(?config_path, ?batches, ?out, "Building keyword report");

    let config = load_config(config_path)?;
    let batch = load_batches(batches)?;
    let report = keyword_report(&config, &batch.pages);

    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
            }
            fs::write(path, &report).wrap_err("Failed to write report")?;
            println!("Wrote {} pages to {}", batch.len(), path.display());
        }
        None => print!("{report}"),
    }

    Ok(())
}
