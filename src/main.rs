//! DDG-Search main entry point
//!
//! Command-line front end for the `search_duckduckgo` tool. It drives the tool
//! exactly as an orchestrator would and prints the payload text.

use clap::Parser;
use ddg_search::config::{load_config_with_hash, validate, Config};
use ddg_search::tool::{descriptor, TOOL_NAME};
use ddg_search::{SearchTool, Searcher};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// DDG-Search: web search via the DuckDuckGo HTML endpoint
///
/// Runs one search and prints the result in the tool payload format. Network
/// failures are answered with fallback results rather than errors.
#[derive(Parser, Debug)]
#[command(name = "ddg-search")]
#[command(version = "1.0.0")]
#[command(about = "Web search via the DuckDuckGo HTML endpoint", long_about = None)]
struct Cli {
    /// Search query
    #[arg(value_name = "QUERY", required_unless_present_any = ["describe", "arguments"])]
    query: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of results (1-20)
    #[arg(short = 'n', long, default_value_t = 10)]
    max_results: i64,

    /// Raw JSON tool arguments, used instead of QUERY and --max-results
    #[arg(long, value_name = "JSON", conflicts_with = "query")]
    arguments: Option<String>,

    /// Print the tool descriptor as JSON and exit
    #[arg(long, conflicts_with_all = ["query", "arguments"])]
    describe: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if cli.describe {
        println!("{}", serde_json::to_string_pretty(&descriptor())?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            let cfg = Config::default();
            validate(&cfg)?;
            cfg
        }
    };

    let arguments: Value = match &cli.arguments {
        Some(raw) => serde_json::from_str(raw)?,
        None => json!({ "query": cli.query, "max_results": cli.max_results }),
    };

    let tool = SearchTool::new(Searcher::new(&config)?);
    let result = tool.call(TOOL_NAME, &arguments).await;

    println!("{}", result.text());

    if result.is_error {
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the payload.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ddg_search=info,warn"),
            1 => EnvFilter::new("ddg_search=debug,info"),
            2 => EnvFilter::new("ddg_search=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
