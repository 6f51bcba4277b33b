use serde::{Deserialize, Serialize};

use crate::config::engine::parse_var;
use crate::error::AppError;

/// Reference deployments host at most three simultaneous tables.
pub const DEFAULT_MAX_TABLES: usize = 3;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub max_tables: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_tables: DEFAULT_MAX_TABLES,
        }
    }
}

impl RegistryConfig {
    /// Build from `FODINHA_MAX_TABLES`, falling back to the default.
    pub fn from_env() -> Result<Self, AppError> {
        let max_tables = parse_var("FODINHA_MAX_TABLES")?.unwrap_or(DEFAULT_MAX_TABLES);
        if max_tables == 0 {
            return Err(AppError::config("FODINHA_MAX_TABLES must be at least 1"));
        }
        Ok(Self { max_tables })
    }
}
