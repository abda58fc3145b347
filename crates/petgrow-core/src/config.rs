//! # Class Configuration
//!
//! Per-class settings loaded from TOML.
//!
//! ```toml
//! class_name = "三年二班"
//!
//! [[stages]]
//! name = "蛋"
//! min_points = 0
//! max_points = 20
//! emoji = "🥚"
//!
//! [[stages]]
//! name = "传说"
//! min_points = 20
//! max_points = "unbounded"
//! ```
//!
//! A file without `[[stages]]` uses the built-in table. Stage tables are
//! validated by [`ClassConfig::table`], never per calculation.

use crate::{PetGrowError, StageDefinition, StageTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum configuration file size (1 MiB).
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Class name used when the file does not set one.
pub const DEFAULT_CLASS_NAME: &str = "default";

fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_string()
}

/// Settings for one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    #[serde(default = "default_class_name")]
    pub class_name: String,

    /// Custom stage table. Empty means the built-in table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stages: Vec<StageDefinition>,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            class_name: default_class_name(),
            stages: Vec::new(),
        }
    }
}

impl ClassConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PetGrowError> {
        toml::from_str(s).map_err(|e| PetGrowError::ConfigError(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PetGrowError> {
        let path = path.as_ref();

        let metadata = std::fs::metadata(path).map_err(|e| {
            PetGrowError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(PetGrowError::IoError(format!(
                "'{}' is not a regular file",
                path.display()
            )));
        }
        if metadata.len() > MAX_CONFIG_SIZE {
            return Err(PetGrowError::ConfigError(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_SIZE
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PetGrowError::IoError(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PetGrowError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check if this class overrides the built-in stage table.
    #[must_use]
    pub fn has_custom_stages(&self) -> bool {
        !self.stages.is_empty()
    }

    /// Validate and build the stage table for this class.
    pub fn table(&self) -> Result<StageTable, PetGrowError> {
        if self.stages.is_empty() {
            return Ok(StageTable::default());
        }
        StageTable::new(self.stages.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================
