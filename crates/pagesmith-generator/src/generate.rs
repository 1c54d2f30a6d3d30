//! Generation orchestration.
//!
//! Maps slugs to output paths and writes each page once.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::NaiveDate;
use pagesmith_core::{BatchEntry, Config, PageSpec};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    render::{PageRenderer, RenderError},
    write::{WriteOutcome, write_if_absent},
};

/// Generation errors.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Slug cannot be used as a directory name.
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    /// Slug appears more than once in a batch.
    #[error("duplicate slug in batch: {0}")]
    DuplicateSlug(String),

    /// Render error.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// IO error.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Result of generating one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// `true` if the file was created by this call.
    pub written: bool,

    /// Canonical path of the page module.
    pub path: PathBuf,
}

/// Batch statistics.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    /// Number of pages written.
    pub written: usize,

    /// Number of pages skipped because they already existed.
    pub skipped: usize,

    /// Slugs written, in batch order.
    pub written_slugs: Vec<String>,

    /// Slugs skipped, in batch order.
    pub skipped_slugs: Vec<String>,

    /// Batch duration in milliseconds.
    pub duration_ms: u64,
}

/// Page generator.
#[derive(Debug, Clone)]
pub struct Generator {
    renderer: PageRenderer,
    output_dir: PathBuf,
    entry_file: String,
}

impl Generator {
    /// Create a generator writing under `config.output.dir`.
    #[must_use]
    pub fn new(config: Config, date: NaiveDate) -> Self {
        let output_dir = config.output.dir.clone();
        let entry_file = config.output.entry_file.clone();
        Self {
            renderer: PageRenderer::new(config, date),
            output_dir,
            entry_file,
        }
    }

    /// Create a generator around an existing renderer.
    #[must_use]
    pub fn with_renderer(renderer: PageRenderer) -> Self {
        let output = &renderer.config().output;
        Self {
            output_dir: output.dir.clone(),
            entry_file: output.entry_file.clone(),
            renderer,
        }
    }

    /// Override the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// The directory page folders are created in.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Canonical path of the page module for `slug`.
    #[must_use]
    pub fn output_path(&self, slug: &str) -> PathBuf {
        self.output_dir.join(slug).join(&self.entry_file)
    }

    /// Generate the page for `slug` unless it already exists.
    pub fn generate(&self, slug: &str, spec: &PageSpec) -> Result<Generated> {
        validate_slug(slug)?;
        let path = self.output_path(slug);

        if path.exists() {
            info!(slug, path = %path.display(), "skipped");
            return Ok(Generated {
                written: false,
                path,
            });
        }

        let source = self.renderer.render(slug, spec)?;
        let outcome = write_if_absent(&path, &source).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;

        match outcome {
            WriteOutcome::Written => info!(slug, path = %path.display(), "wrote page"),
            WriteOutcome::Skipped => info!(slug, path = %path.display(), "skipped"),
        }

        Ok(Generated {
            written: outcome.is_written(),
            path,
        })
    }

    /// Generate every entry of a batch in parallel.
    ///
    /// Duplicate slugs are rejected before anything is written. The first
    /// failing entry aborts the batch.
    pub fn generate_batch(&self, entries: &[BatchEntry]) -> Result<BatchStats> {
        let start = Instant::now();

        let mut seen = std::collections::HashSet::new();
        for entry in entries {
            validate_slug(&entry.slug)?;
            if !seen.insert(entry.slug.as_str()) {
                return Err(GenerateError::DuplicateSlug(entry.slug.clone()));
            }
        }

        info!(
            count = entries.len(),
            output = %self.output_dir.display(),
            "generating pages"
        );

        let results = entries
            .par_iter()
            .map(|entry| self.generate(&entry.slug, &entry.spec))
            .collect::<Result<Vec<_>>>()?;

        let mut stats = BatchStats::default();
        for (entry, generated) in entries.iter().zip(results) {
            if generated.written {
                stats.written += 1;
                stats.written_slugs.push(entry.slug.clone());
            } else {
                stats.skipped += 1;
                stats.skipped_slugs.push(entry.slug.clone());
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            written = stats.written,
            skipped = stats.skipped,
            duration_ms = stats.duration_ms,
            "generation complete"
        );

        Ok(stats)
    }
}

/// Reject slugs that are empty or would escape their page directory.
pub fn validate_slug(slug: &str) -> Result<()> {
    let invalid = slug.is_empty()
        || slug == "."
        || slug.contains("..")
        || slug.contains(['/', '\\'])
        || slug.chars().any(char::is_whitespace);

    if invalid {
        debug!(slug, "rejected slug");
        return Err(GenerateError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}
