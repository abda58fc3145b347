//! # petgrow-core
//!
//! The stage engine for PetGrow - THE LOGIC.
//!
//! A class pet grows through named stages as its student or group earns
//! points. This crate answers two questions for a point total and an ordered
//! stage table: which stage applies, and how far through that stage the pet is.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is stateless: points are supplied per call and never stored
//! - Validates stage tables once, at load time; calculations cannot fail
//! - Never produces a progress value outside `[0, 100]`, nor NaN
//! - Has NO async, NO network dependencies (pure Rust)
//!
//! ## Example
//!
//! ```
//! use petgrow_core::{StageTable, resolve_stage, stage_progress};
//!
//! let table = StageTable::default();
//! assert_eq!(resolve_stage(10.0, &table).name, "蛋");
//! assert_eq!(stage_progress(10.0, &table), 50.0);
//! assert_eq!(stage_progress(-100.0, &table), 0.0);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod config;
pub mod leaderboard;
pub mod system;
pub mod table;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{MemberKind, PetGrowError, StageDefinition, UNBOUNDED_KEYWORD, UpperBound};

// =============================================================================
// RE-EXPORTS: Stage Engine
// =============================================================================

pub use config::ClassConfig;
pub use leaderboard::{Leaderboard, LeaderboardEntry, Member};
pub use table::{StageTable, default_stages};

// =============================================================================
// RE-EXPORTS: System (from system module)
// =============================================================================

pub use system::{
    PROGRESS_MAX, PROGRESS_MIN, StageProgress, assess, resolve_index, resolve_stage,
    stage_progress,
};
