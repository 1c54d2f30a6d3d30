//! Generate command - writes page modules for every batch entry

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::{Local, NaiveDate};
use color_eyre::eyre::{Result, WrapErr, bail};
use pagesmith_core::{Config, lint};
use pagesmith_generator::Generator;

use super::{load_batches, load_config};

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct Options {
    /// Batch files to generate from.
    pub batches: Vec<PathBuf>,
    /// Override the configured output directory.
    pub output: Option<PathBuf>,
    /// Publish date stamped into new pages.
    pub date: Option<NaiveDate>,
    /// Refuse to generate when lint warnings exist.
    pub strict: bool,
}

/// Run the generate command.
///
/// Pages whose file already exists are skipped and reported.
pub fn run(config_path: &Path, opts: &Options) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, batches = ?opts.batches, "Starting generation");

    let mut config = load_config(config_path)?;

    // Override output directory if specified
    if let Some(ref output) = opts.output {
        tracing::info!(output = %output.display(), "Overriding output directory from CLI");
        config.output.dir = output.clone();
    }

    let date = resolve_date(opts.date, &config);
    tracing::debug!(?config, %date, "Loaded configuration");

    let batch = load_batches(&opts.batches)?;

    let mut warning_count = 0;
    for entry in &batch.pages {
        let warnings = lint(&entry.slug, &entry.spec);
        if warnings.is_empty() {
            continue;
        }
        if warning_count == 0 {
            println!();
            println!("  Warnings:");
        }
        for warn in &warnings {
            println!("  ⚠ {}: {warn}", entry.slug);
        }
        warning_count += warnings.len();
    }

    if opts.strict && warning_count > 0 {
        bail!("Refusing to generate with {warning_count} warning(s) (strict mode)");
    }

    let output_dir = config.output.dir.clone();
    let generator = Generator::new(config, date);
    let stats = generator
        .generate_batch(&batch.pages)
        .wrap_err("Generation failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Generation completed successfully!");
    println!();
    for slug in &stats.written_slugs {
        println!("  ✓ wrote    {}", generator.output_path(slug).display());
    }
    for slug in &stats.skipped_slugs {
        println!("  - skipped  {} (already exists)", generator.output_path(slug).display());
    }
    println!();
    println!("  Written:    {}", stats.written);
    println!("  Skipped:    {}", stats.skipped);
    println!("  Warnings:   {warning_count}");
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", output_dir.display());
    println!();

    tracing::info!(?stats, ?duration, "Generation completed successfully");

    Ok(())
}

/// Publish date: CLI flag, then `[page] date`, then today.
fn resolve_date(cli: Option<NaiveDate>, config: &Config) -> NaiveDate {
    cli.or(config.page.date)
        .unwrap_or_else(|| Local::now().date_naive())
}
