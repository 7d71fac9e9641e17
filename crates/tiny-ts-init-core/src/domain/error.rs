// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    #[error("Too many arguments: expected at most one directory, got {count}")]
    TooManyArguments { count: usize },

    #[error("Working directory must be absolute: {path}")]
    RelativeWorkingDirectory { path: String },

    // ========================================================================
    // Template Set Errors
    // ========================================================================
    #[error("Template set is empty")]
    EmptyTemplateSet,

    #[error("Duplicate path in template set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in template set: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Template path escapes the project directory: {path}")]
    PathEscapesRoot { path: String },

    #[error("Failed to serialize template '{path}': {reason}")]
    Serialization { path: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TooManyArguments { .. } => vec![
                "Usage:".into(),
                "  tiny-ts-init          # use current directory".into(),
                "  tiny-ts-init .        # use current directory".into(),
                "  tiny-ts-init my-app   # create and use my-app directory".into(),
            ],
            Self::RelativeWorkingDirectory { .. } => {
                vec!["Run tiny-ts-init from an accessible directory".into()]
            }
            Self::EmptyTemplateSet
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::Serialization { .. } => vec![
                "The built-in template set is corrupted".into(),
                "Please report this issue at: https://github.com/cosecruz/tiny-ts-init/issues"
                    .into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TooManyArguments { .. } | Self::RelativeWorkingDirectory { .. } => {
                ErrorCategory::Usage
            }
            Self::EmptyTemplateSet
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
            Self::Serialization { .. } => ErrorCategory::Internal,
        }
    }
}
