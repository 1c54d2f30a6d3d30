//! Pagesmith CLI Library
//!
//! Command implementations for the `pagesmith` binary, exposed as a library
//! so they can be driven from integration code and tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (generate, check, new, keywords)
//!
//! # Example
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//!
//! use pagesmith::cmd;
//!
//! // Generate every page listed in a batch file
//! let opts = cmd::generate::Options {
//!     batches: vec![PathBuf::from("pages.yaml")],
//!     output: None,
//!     date: None,
//!     strict: false,
//! };
//! cmd::generate::run(Path::new("pagesmith.toml"), &opts).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use pagesmith_core::{Batch, Config, PageSpec};
pub use pagesmith_generator::{BatchStats, Generated, Generator};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// pagesmith::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
