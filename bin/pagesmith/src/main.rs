//! Pagesmith CLI
//!
//! Generates page modules from structured page specifications, once per slug.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Pagesmith.
#[derive(Parser)]
#[command(
    name = "pagesmith",
    version,
    about = "Generate-once page modules from page specifications"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pagesmith.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate pages that do not exist yet
    Generate {
        /// Batch files (.yaml, .yml or .json)
        #[arg(required = true)]
        batches: Vec<PathBuf>,
        /// Output directory (overrides output.dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Publish date (YYYY-MM-DD, defaults to page.date or today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Refuse to generate when lint warnings exist
        #[arg(long)]
        strict: bool,
    },
    /// Validate configuration and batch files
    Check {
        /// Batch files (.yaml, .yml or .json)
        #[arg(required = true)]
        batches: Vec<PathBuf>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Create a skeleton batch file for a new page
    New {
        /// Page slug (e.g., how-to-buy-xrp)
        slug: String,
        /// Batch file to create
        #[arg(short, long, default_value = "pages.yaml")]
        file: PathBuf,
    },
    /// Write a page and keyword report
    Keywords {
        /// Batch files (.yaml, .yml or .json)
        #[arg(required = true)]
        batches: Vec<PathBuf>,
        /// Output file (defaults to stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    pagesmith::init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            batches,
            output,
            date,
            strict,
        } => {
            let opts = pagesmith::cmd::generate::Options {
                batches,
                output,
                date,
                strict,
            };
            pagesmith::cmd::generate::run(&cli.config, &opts)?;
        }
        Commands::Check { batches, strict } => {
            pagesmith::cmd::check::run(&cli.config, &batches, strict)?;
        }
        Commands::New { slug, file } => {
            pagesmith::cmd::new::run(&slug, &file)?;
        }
        Commands::Keywords { batches, out } => {
            pagesmith::cmd::keywords::run(&cli.config, &batches, out.as_deref())?;
        }
    }

    Ok(())
}
