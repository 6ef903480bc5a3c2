//! DriveMatch CLI - run instructor searches against the marketplace API.
//!
//! Resolves the API base from `--api-url` or `VITE_API_URL`, runs one
//! search through the core pipeline and prints the instructor list.

mod output;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drivematch_core::{
    ApiConfig, ExperienceBracket, FilterCriteria, HttpInstructorSource, LicenseFilter,
    LicenseType, SearchConfig, SearchInput, SearchPipeline,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "drivematch")]
#[command(about = "Search driving instructors on the DriveMatch marketplace")]
struct Cli {
    /// API base URL (defaults to $VITE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search instructors by name or city, with optional filters
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Name or city to search for
    #[arg(short, long, default_value = "")]
    query: String,

    /// Only instructors teaching this license category (A-E)
    #[arg(long)]
    license: Option<LicenseType>,

    /// Minimum average rating (0 = any)
    #[arg(long, default_value_t = 0.0)]
    min_rating: f64,

    /// Maximum hourly rate
    #[arg(long, default_value_t = SearchConfig::DEFAULT_MAX_HOURLY_RATE)]
    max_price: f64,

    /// Only verified instructors
    #[arg(long)]
    verified: bool,

    /// Experience bracket: all, beginner, intermediate, expert
    #[arg(long, default_value = "all")]
    experience: ExperienceBracket,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

impl SearchArgs {
    fn to_input(&self) -> SearchInput {
        let criteria = FilterCriteria {
            license: self
                .license
                .map(LicenseFilter::Only)
                .unwrap_or(LicenseFilter::All),
            min_rating: self.min_rating,
            max_price: self.max_price,
            verified_only: self.verified,
            experience: self.experience,
        };
        SearchInput::new(self.query.clone(), criteria)
    }
}

/// Log directive used when `RUST_LOG` is not set.
fn default_log_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(cli.debug)));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match cli.api_url {
        Some(ref url) => ApiConfig::parse(url),
        None => ApiConfig::from_env(),
    }
    .context("Could not determine the API URL (use --api-url or set VITE_API_URL)")?;

    info!("Using API at {}", config.base_url);
    let source = HttpInstructorSource::new(config)?;
    let pipeline = SearchPipeline::new(Arc::new(source));

    match cli.command {
        Command::Search(args) => {
            let input = args.to_input();
            let instructors = pipeline
                .try_run(&input)
                .await
                .context("Instructor search failed")?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&instructors)?);
            } else {
                print!("{}", output::render_table(&instructors));
            }
        }
    }

    Ok(())
}
