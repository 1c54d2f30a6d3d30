//! Batch files of page specifications.
//!
//! A batch is a YAML or JSON document with a top-level `pages` list. Each
//! entry carries a `slug` next to the [`PageSpec`] fields:
//!
//! ```yaml
//! pages:
//!   - slug: how-to-send-xrp
//!     title: How to Send XRP
//!     accent: Fast & Cheap Transfers
//!     # ...
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{CoreError, Result},
    spec::PageSpec,
};

/// A page specification paired with its slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Unique page identifier.
    pub slug: String,

    /// The page content.
    #[serde(flatten)]
    pub spec: PageSpec,
}

/// Supported batch file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl BatchFormat {
    /// Determine the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// An ordered list of page specifications loaded from one or more files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    pub pages: Vec<BatchEntry>,
}

impl Batch {
    /// Parse a batch from a string in the given format.
    pub fn parse(content: &str, format: BatchFormat) -> Result<Self> {
        Ok(match format {
            BatchFormat::Yaml => serde_yaml::from_str(content)?,
            BatchFormat::Json => serde_json::from_str(content)?,
        })
    }

    /// Load a batch file. The format is chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(BatchFormat::from_extension)
            .ok_or_else(|| {
                CoreError::batch(path, "unsupported extension (expected .yaml, .yml or .json)")
            })?;

        let content = std::fs::read_to_string(path)
            .map_err(|e| CoreError::batch(path, format!("failed to read file: {e}")))?;

        let batch =
            Self::parse(&content, format).map_err(|e| CoreError::batch(path, e.to_string()))?;

        debug!(path = %path.display(), pages = batch.pages.len(), "loaded batch");
        Ok(batch)
    }

    /// Load several batch files, keeping file order and entry order.
    pub fn load_all<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut combined = Self::default();
        for path in paths {
            combined.pages.extend(Self::load(path.as_ref())?.pages);
        }
        Ok(combined)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the batch has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Slugs that appear more than once, in order of their second occurrence.
    #[must_use]
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for entry in &self.pages {
            if !seen.insert(entry.slug.as_str()) && !dupes.contains(&entry.slug.as_str()) {
                dupes.push(entry.slug.as_str());
            }
        }
        dupes
    }

    /// Render the batch as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::tests::SAMPLE_YAML;

    fn sample_batch_yaml(slugs: &[&str]) -> String {
        let mut out = String::from("pages:\n");
        for slug in slugs {
            out.push_str(&format!("  - slug: {slug}\n"));
            for line in SAMPLE_YAML.trim_start_matches('\n').lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    #[test]
    fn test_parse_yaml_batch() {
        let batch =
            Batch::parse(&sample_batch_yaml(&["alpha", "beta"]), BatchFormat::Yaml).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.pages[0].slug, "alpha");
        assert_eq!(batch.pages[1].slug, "beta");
        assert_eq!(batch.pages[1].spec.title.as_str(), "How to Store XRP Safely");
    }

    #[test]
    fn test_parse_yaml_batch_with_unquoted_scalars() {
        let yaml = sample_batch_yaml(&["xrpl"])
            .replace("{ l: Best, v: Hardware }", "{ l: Launched, v: 2012 }")
            .replace("{ l: Reserve, v: 10 XRP }", "{ l: Fee, v: 1.5 }")
            .replace("{ l: Reserve, v: 10 XRP minimum }", "{ l: Validators, v: 150 }")
            .replace("a: 10 XRP. }", "a: true }");

        let batch = Batch::parse(&yaml, BatchFormat::Yaml).unwrap();
        let spec = &batch.pages[0].spec;

        assert_eq!(spec.stats[0].value.as_str(), "2012");
        assert_eq!(spec.stats[1].value.as_str(), "1.5");
        assert_eq!(spec.facts[1].value.as_str(), "150");
        assert_eq!(spec.faq[1].answer.as_str(), "true");
    }

    #[test]
    fn test_parse_json_batch() {
        let yaml = Batch::parse(&sample_batch_yaml(&["alpha"]), BatchFormat::Yaml).unwrap();
        let json = serde_json::to_string(&yaml).unwrap();
        let batch = Batch::parse(&json, BatchFormat::Json).unwrap();
        assert_eq!(batch, yaml);
    }

    #[test]
    fn test_load_detects_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch1.yml");
        std::fs::write(&path, sample_batch_yaml(&["alpha"])).unwrap();

        let batch = Batch::load(&path).unwrap();
        assert_eq!(batch.pages[0].slug, "alpha");
    }

    #[test]
    fn test_load_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch1.mjs");
        std::fs::write(&path, "").unwrap();

        let err = Batch::load(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported extension"));
        assert!(err.to_string().contains("batch1.mjs"));
    }

    #[test]
    fn test_load_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "pages:\n  - slug: only-a-slug\n").unwrap();

        let err = Batch::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::Batch { .. }));
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_load_all_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.yaml");
        let second = dir.path().join("b.yaml");
        std::fs::write(&first, sample_batch_yaml(&["one", "two"])).unwrap();
        std::fs::write(&second, sample_batch_yaml(&["three"])).unwrap();

        let batch = Batch::load_all([&first, &second]).unwrap();
        let slugs: Vec<_> = batch.pages.iter().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_duplicate_slugs() {
        let batch = Batch::parse(
            &sample_batch_yaml(&["a", "b", "a", "a", "c", "b"]),
            BatchFormat::Yaml,
        )
        .unwrap();
        assert_eq!(batch.duplicate_slugs(), vec!["a", "b"]);
    }
}
