//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.
//! Product creation and queries are total, so the taxonomy here is small:
//! only catalog resolution can fail.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Line resolution failed (parsed but unregistered marker).
    #[error("Line resolution failed: {reason}")]
    LineResolution { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LineResolution { reason } => vec![
                format!("Resolution failed: {}", reason),
                "Try: fabrica list to see registered product lines".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LineResolution { .. } => ErrorCategory::NotFound,
        }
    }
}
