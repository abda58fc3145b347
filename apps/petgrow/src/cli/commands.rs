//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use super::render::{BAR_WIDTH, format_points, progress_bar};
use crate::api;
use petgrow_core::{
    ClassConfig, Leaderboard, Member, MemberKind, PetGrowError, StageTable, assess,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LOADING
// =============================================================================

/// Maximum roster file size (10 MB).
const MAX_ROSTER_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Resolve a user-supplied path to an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, PetGrowError> {
    let canonical = path.canonicalize().map_err(|e| {
        PetGrowError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(PetGrowError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Load the class configuration and validate its stage table.
pub fn load_class(config: Option<&Path>) -> Result<(ClassConfig, StageTable), PetGrowError> {
    let class = match config {
        Some(path) => {
            let path = validate_file_path(path)?;
            tracing::debug!("Loading class configuration from {:?}", path);
            ClassConfig::load(&path)?
        }
        None => ClassConfig::default(),
    };
    let table = class.table()?;
    Ok((class, table))
}

/// Load a roster file: a JSON array of members.
pub fn load_roster(path: &Path) -> Result<Vec<Member>, PetGrowError> {
    let path = validate_file_path(path)?;

    let metadata = std::fs::metadata(&path)
        .map_err(|e| PetGrowError::IoError(format!("Cannot read file metadata: {}", e)))?;
    if metadata.len() > MAX_ROSTER_FILE_SIZE {
        return Err(PetGrowError::InvalidRoster(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_ROSTER_FILE_SIZE
        )));
    }

    let contents = std::fs::read(&path)
        .map_err(|e| PetGrowError::IoError(format!("Read file: {}", e)))?;
    let members: Vec<Member> = serde_json::from_slice(&contents)
        .map_err(|e| PetGrowError::InvalidRoster(e.to_string()))?;

    tracing::info!("Loaded {} members from {:?}", members.len(), path);
    Ok(members)
}

fn print_json(value: &serde_json::Value) -> Result<(), PetGrowError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| PetGrowError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

// =============================================================================
// STAGE COMMAND
// =============================================================================

/// Show the stage for a point total.
pub fn cmd_stage(
    config: Option<&Path>,
    json_mode: bool,
    points: f64,
    detailed: bool,
) -> Result<(), PetGrowError> {
    let (_, table) = load_class(config)?;
    let report = assess(points, &table);

    if json_mode {
        let output = serde_json::json!({
            "points": report.points,
            "index": report.index,
            "stage": report.stage.name,
            "emoji": report.stage.emoji,
            "progress_percent": report.percent,
            "next_stage": report.next.as_ref().map(|s| s.name.as_str()),
            "points_to_next": report.points_to_next,
        });
        return print_json(&output);
    }

    println!("Points: {}", format_points(points));
    println!("Stage:  {}", report.stage);
    println!("        {}", progress_bar(report.percent, BAR_WIDTH));

    if detailed {
        println!();
        match (&report.next, report.points_to_next) {
            (Some(next), Some(needed)) => {
                println!("Next Stage: {}", next);
                println!("Needed:     {} points", format_points(needed));
            }
            _ => println!("Top stage reached"),
        }
    }

    Ok(())
}

// =============================================================================
// TABLE COMMAND
// =============================================================================

/// List the configured stages.
pub fn cmd_table(config: Option<&Path>, json_mode: bool) -> Result<(), PetGrowError> {
    let (class, table) = load_class(config)?;

    if json_mode {
        let output = serde_json::json!({
            "class_name": class.class_name,
            "custom": class.has_custom_stages(),
            "stages": table,
        });
        return print_json(&output);
    }

    println!("PetGrow Stages: {}", class.class_name);
    println!("====================");
    for (i, stage) in table.iter().enumerate() {
        println!("  {}. {}", i + 1, stage);
    }
    if !class.has_custom_stages() {
        println!();
        println!("(built-in table)");
    }

    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Validate the class configuration.
pub fn cmd_validate(config: Option<&Path>, json_mode: bool) -> Result<(), PetGrowError> {
    let result = load_class(config);

    if json_mode {
        let output = match &result {
            Ok((class, table)) => serde_json::json!({
                "valid": true,
                "class_name": class.class_name,
                "stage_count": table.len(),
            }),
            Err(e) => serde_json::json!({
                "valid": false,
                "error": e.to_string(),
            }),
        };
        print_json(&output)?;
        return result.map(|_| ());
    }

    let (class, table) = result?;
    println!(
        "Configuration OK: class '{}' with {} stages",
        class.class_name,
        table.len()
    );
    Ok(())
}

// =============================================================================
// BOARD COMMAND
// =============================================================================

/// Rank a roster file.
pub fn cmd_board(
    config: Option<&Path>,
    json_mode: bool,
    roster: &Path,
    kind: Option<MemberKind>,
    top: Option<usize>,
) -> Result<(), PetGrowError> {
    let (class, table) = load_class(config)?;
    let members = load_roster(roster)?;

    let mut board = Leaderboard::rank(&members, &table)?;
    if let Some(kind) = kind {
        board = board.filter_kind(kind);
    }
    if let Some(n) = top {
        board = board.top(n);
    }

    if json_mode {
        let output = serde_json::json!({
            "class_name": class.class_name,
            "entries": board.entries,
        });
        return print_json(&output);
    }

    println!("PetGrow Leaderboard: {}", class.class_name);
    println!("=========================");
    if board.is_empty() {
        println!("(no members)");
        return Ok(());
    }

    for entry in &board.entries {
        let pet = match &entry.emoji {
            Some(emoji) => format!("{} {}", emoji, entry.stage),
            None => entry.stage.clone(),
        };
        println!(
            "{:>4}. {:<16} {:<8} {:>8}  {:<10} {}",
            entry.rank,
            entry.name,
            entry.kind,
            format_points(entry.points),
            pet,
            progress_bar(entry.percent, BAR_WIDTH / 2)
        );
    }

    Ok(())
}

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(config: Option<&Path>, host: &str, port: u16) -> Result<(), PetGrowError> {
    let (class, table) = load_class(config)?;
    let state = api::AppState::from_parts(class, table);

    println!("PetGrow Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:   {}", host);
    println!("  Port:   {}", port);
    println!("  Class:  {}", state.config.class_name);
    println!("  Stages: {}", state.table.len());
    println!();
    println!("Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  GET  /stages      - Stage table");
    println!("  GET  /stage       - Stage for ?points=N");
    println!("  POST /leaderboard - Rank a roster");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, state).await
}
