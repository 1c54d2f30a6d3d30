//! Check command - validate configuration and batch files

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail};
use pagesmith_core::{Batch, Config, lint};
use pagesmith_generator::generate::validate_slug;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates configuration and every entry of the given batch files.
pub fn run(config_path: &Path, batches: &[PathBuf], strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?batches, strict, "Checking configuration and batches");

    let mut result = ValidationResult::default();

    // Validate configuration
    println!("Checking configuration...");
    let config = if config_path.exists() {
        match Config::load_with_env(config_path) {
            Ok(c) => {
                println!("  ✓ Configuration valid");
                Some(c)
            }
            Err(e) => {
                result.add_error(format!("Configuration error: {e}"));
                println!("  ✗ Configuration invalid: {e}");
                None
            }
        }
    } else {
        result.add_warning(format!(
            "Configuration file {} does not exist, using defaults",
            config_path.display()
        ));
        Some(Config::default())
    };

    // Validate batch files
    println!("\nChecking batch files...");
    let mut combined = Batch::default();
    for path in batches {
        match Batch::load(path) {
            Ok(batch) => {
                println!("  ✓ {} ({} pages)", path.display(), batch.len());
                combined.pages.extend(batch.pages);
            }
            Err(e) => {
                result.add_error(e.to_string());
                println!("  ✗ {}", path.display());
            }
        }
    }

    if combined.is_empty() {
        result.add_warning("No pages found in batch files");
    }

    println!("\nChecking pages...");
    validate_pages(&combined, &mut result);

    if let Some(ref cfg) = config {
        println!("\nChecking output paths...");
        check_existing_pages(cfg, &combined, &mut result);
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Slug validity and duplicates are errors; lint findings are warnings.
fn validate_pages(batch: &Batch, result: &mut ValidationResult) {
    for slug in batch.duplicate_slugs() {
        result.add_error(format!("Duplicate slug: {slug}"));
    }

    for entry in &batch.pages {
        if let Err(e) = validate_slug(&entry.slug) {
            result.add_error(e.to_string());
            continue;
        }

        let warnings = lint(&entry.slug, &entry.spec);
        if warnings.is_empty() {
            println!("  ✓ {}", entry.slug);
        } else {
            println!("  ⚠ {} ({} warning(s))", entry.slug, warnings.len());
        }
        for warn in warnings {
            result.add_warning(format!("{}: {warn}", entry.slug));
        }
    }
}

/// Report pages that `generate` would skip.
fn check_existing_pages(config: &Config, batch: &Batch, result: &mut ValidationResult) {
    let mut existing = 0;
    for entry in &batch.pages {
        if validate_slug(&entry.slug).is_err() {
            continue;
        }
        let path = config.output_path(&entry.slug);
        if path.exists() {
            existing += 1;
            println!("  - {} exists, will be skipped", path.display());
        }
    }
    if existing == 0 {
        println!("  ✓ No existing pages");
    }
}
