//! Pagesmith Core Library
//!
//! Page specification model, batch loading, linting, configuration, and error
//! handling for the Pagesmith page generator.

pub mod batch;
pub mod config;
pub mod error;
pub mod lint;
pub mod spec;

pub use batch::{Batch, BatchEntry};
pub use config::Config;
pub use error::{CoreError, Result};
pub use lint::{LintWarning, lint};
pub use spec::{Cta, CtaLink, EscapedText, FaqEntry, Fact, PageSpec, RawMarkup, RelatedLink, Section, Stat};
