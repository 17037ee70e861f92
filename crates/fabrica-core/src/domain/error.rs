// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Product and factory operations are total and cannot fail; domain errors
/// only arise at the edges, when user-supplied text is parsed into domain
/// values. All errors are:
/// - Cloneable (cheap, no sources)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A line marker that names no registered variant.
    #[error("unknown product line '{given}'")]
    UnknownVariant { given: String },

    /// A product kind outside A..D.
    #[error("unknown product kind '{given}'")]
    UnknownProductKind { given: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownVariant { given } => vec![
                format!("'{}' does not name a registered product line", given),
                "Known lines:".into(),
                "  • 1 - first concrete family".into(),
                "  • 2 - second concrete family".into(),
                "Try: fabrica list".into(),
            ],
            Self::UnknownProductKind { given } => vec![
                format!("'{}' is not a product kind", given),
                "Product kinds are A, B, C, and D".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownVariant { .. } => ErrorCategory::NotFound,
            Self::UnknownProductKind { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
