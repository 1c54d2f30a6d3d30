//! Generator configuration management.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Pagesmith.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// The site section generated pages live under.
    #[serde(default)]
    pub section: SectionConfig,

    /// Output location settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Per-page metadata settings.
    #[serde(default)]
    pub page: PageConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name, used as title suffix and in the editorial credit.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Base URL for the site (e.g., "https://example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Section configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Display name, the middle element of the breadcrumb trail.
    #[serde(default = "default_section_name")]
    pub name: String,

    /// URL path segment for the section.
    #[serde(default = "default_section_path")]
    pub path: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base directory; each page is written to `{dir}/{slug}/{entry_file}`.
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// File name the site toolchain treats as a route's page implementation.
    #[serde(default = "default_entry_file")]
    pub entry_file: String,
}

/// Page metadata configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    /// Publish and modified date stamped into generated pages.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

// Default value functions
fn default_site_name() -> String {
    "AllAboutXRP".to_string()
}

fn default_base_url() -> String {
    "https://allaboutxrp.com".to_string()
}

fn default_section_name() -> String {
    "Learn".to_string()
}

fn default_section_path() -> String {
    "learn".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("src/app/learn")
}

fn default_entry_file() -> String {
    "page.tsx".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
        }
    }
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            name: default_section_name(),
            path: default_section_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            entry_file: default_entry_file(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `PAGESMITH__`
    /// environment variables taking precedence over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("PAGESMITH").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.section.path.trim_matches('/').is_empty() {
            return Err(CoreError::config("section.path cannot be empty"));
        }

        if self.output.entry_file.is_empty() {
            return Err(CoreError::config("output.entry_file cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// The site home URL.
    pub fn home_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// The section index URL.
    pub fn section_url(&self) -> String {
        format!("{}/{}", self.home_url(), self.section.path.trim_matches('/'))
    }

    /// Canonical URL for a page slug.
    pub fn url_for(&self, slug: &str) -> String {
        format!("{}/{}", self.section_url(), slug.trim_matches('/'))
    }

    /// Path of the generated file for a page slug.
    pub fn output_path(&self, slug: &str) -> PathBuf {
        self.output.dir.join(slug).join(&self.output.entry_file)
    }
}
