//! Pagesmith Generator Library
//!
//! Turns [`pagesmith_core::PageSpec`] records into page module source files.
//!
//! # Modules
//!
//! - [`template`] - Source template system with variable interpolation
//! - [`schema`] - Structured-data records (Article, Breadcrumb, Speakable, FAQ)
//! - [`render`] - `PageSpec` to source text rendering
//! - [`write`] - Generate-once file writes
//! - [`generate`] - Per-slug generation and batch orchestration
//! - [`keywords`] - Page and keyword report

pub mod generate;
pub mod keywords;
pub mod render;
pub mod schema;
pub mod template;
pub mod write;

pub use generate::{BatchStats, GenerateError, Generated, Generator};
pub use keywords::keyword_report;
pub use render::{PageRenderer, RenderError};
pub use template::{Template, TemplateContext, TemplateRegistry};
pub use write::{WriteOutcome, write_if_absent};
