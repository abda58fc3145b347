//! # PetGrow - Classroom Pet Server
//!
//! The main binary for the PetGrow stage engine.
//!
//! This application provides:
//! - HTTP JSON API server (axum-based) for the classroom UI
//! - CLI interface for stage lookups, configuration checks and leaderboards
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             apps/petgrow (THE BINARY)        │
//! │                                              │
//! │   ┌─────────────┐        ┌─────────────┐     │
//! │   │    CLI      │        │  HTTP API   │     │
//! │   │   (clap)    │        │   (axum)    │     │
//! │   └──────┬──────┘        └──────┬──────┘     │
//! │          └───────────┬──────────┘            │
//! │                      ▼                       │
//! │              ┌───────────────┐               │
//! │              │ petgrow-core  │               │
//! │              │  (THE LOGIC)  │               │
//! │              └───────────────┘               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! petgrow -c class.toml server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! petgrow stage --points 42 --detailed
//! petgrow -c class.toml validate
//! petgrow board --roster roster.json --top 10
//! ```

use clap::Parser;
use petgrow::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing — PETGROW_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PETGROW_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "petgrow=debug,petgrow_core=debug,tower_http=debug"
    } else {
        "petgrow=info,tower_http=debug"
    };
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

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the PetGrow startup banner.
fn print_banner() {
    println!(
        r#"
  🥚 → 🐣 → 🐥 → 🐔 → 🦅 → 🐉

  PetGrow v{}

  Points in • Pets out
"#,
        env!("CARGO_PKG_VERSION")
    );
}
