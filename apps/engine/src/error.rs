use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;
use crate::services::table_registry::TableId;

/// Service-level error for callers that go through the table registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Table not found: {table_id}")]
    TableNotFound { table_id: TableId },
    #[error("Registry full: at most {max_tables} tables")]
    RegistryFull { max_tables: usize },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::TableNotFound { .. } => ErrorCode::TableNotFound,
            AppError::RegistryFull { .. } => ErrorCode::RegistryFull,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Rejections caused by stale client state; retrying the same call cannot succeed.
    pub fn is_stale_client_state(&self) -> bool {
        matches!(
            self,
            AppError::Domain(DomainError::NotYourTurn { .. } | DomainError::WrongPhase { .. })
        )
    }
}
