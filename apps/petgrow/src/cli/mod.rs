//! # PetGrow CLI Module
//!
//! This module implements the CLI interface for PetGrow.
//!
//! ## Available Commands
//!
//! - `stage` - Show the pet stage for a point total
//! - `table` - List the configured stages
//! - `validate` - Check a class configuration file
//! - `board` - Rank a roster file
//! - `server` - Start the HTTP server

mod commands;
pub mod render;

use clap::{Parser, Subcommand};
use petgrow_core::{MemberKind, PetGrowError};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// PetGrow - classroom pets that grow with points
///
/// Resolves growth stages and progress bars from point totals,
/// and serves them to the classroom UI.
#[derive(Parser, Debug)]
#[command(name = "petgrow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the class configuration (TOML). Built-in stages if omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the stage and progress for a point total
    Stage {
        /// Point total (may be negative)
        #[arg(short, long, allow_negative_numbers = true)]
        points: f64,

        /// Show next stage and points still needed
        #[arg(short, long)]
        detailed: bool,
    },

    /// List the configured stages
    Table,

    /// Validate the class configuration
    Validate,

    /// Rank a roster (JSON array of {name, kind, points})
    Board {
        /// Path to the roster file
        #[arg(short, long)]
        roster: PathBuf,

        /// Only show students or only groups
        #[arg(short, long)]
        kind: Option<MemberKind>,

        /// Show only the first N rows
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PetGrowError> {
    let config = cli.config.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Stage { points, detailed }) => {
            cmd_stage(config, json_mode, points, detailed)
        }
        Some(Commands::Table) | None => cmd_table(config, json_mode),
        Some(Commands::Validate) => cmd_validate(config, json_mode),
        Some(Commands::Board { roster, kind, top }) => {
            cmd_board(config, json_mode, &roster, kind, top)
        }
        Some(Commands::Server { host, port }) => cmd_server(config, &host, port).await,
    }
}
