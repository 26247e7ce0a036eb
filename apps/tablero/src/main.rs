//! # Tablero
//!
//! The Tablero command-line client.
//!
//! ## Usage
//!
//! ```bash
//! # Show the dataset
//! tablero --url http://localhost:5000 show
//!
//! # Upload a spreadsheet, then show the refreshed dataset
//! tablero upload -f registros.xlsx
//!
//! # Save the spreadsheet export
//! tablero download -o registros.xlsx
//! ```

use clap::Parser;
use tablero::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = cli::execute(cli).await {
        match e.unreported() {
            Some(error) => tracing::error!("Error: {}", error),
            None => tracing::debug!("exiting after shown error: {}", e.error()),
        }
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr; stdout is reserved for table output.
///
/// TABLERO_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("TABLERO_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose { "tablero=debug" } else { "tablero=info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
