//! Application layer errors.
//!
//! These errors represent failures in the provisioning workflow, not
//! invalid input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while provisioning a project.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// New-directory mode, but the directory is already there.
    #[error("Directory {path} already exists")]
    DirectoryExists { path: PathBuf },

    /// One or more template files are already present in the target.
    #[error(
        "The following files already exist in {root}: {}",
        .paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
    )]
    FilesExist { root: PathBuf, paths: Vec<PathBuf> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The installer program could not be started.
    #[error("Could not run '{program}': {reason}")]
    InstallerUnavailable { program: String, reason: String },

    /// The installer ran and reported failure.
    #[error("'{command}' failed with {}", describe_exit(.code))]
    InstallerFailed { command: String, code: Option<i32> },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Or run tiny-ts-init inside it with '.' to reuse it".into(),
            ],
            Self::FilesExist { paths, .. } => {
                let mut suggestions = vec!["Conflicting files:".to_string()];
                suggestions.extend(paths.iter().map(|p| format!("  - {}", p.display())));
                suggestions.push("Move or delete them, or pick an empty directory".into());
                suggestions
            }
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::InstallerUnavailable { program, .. } => vec![
                format!("Ensure '{program}' is installed and on your PATH"),
                "Or choose another installer via installer.program in the config".into(),
            ],
            Self::InstallerFailed { command, .. } => vec![
                format!("'{command}' reported an error; see its output above"),
                "The project files were created; re-run the install manually".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } | Self::FilesExist { .. } => ErrorCategory::Conflict,
            Self::InstallerUnavailable { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::InstallerFailed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_exist_lists_every_path() {
        let err = ApplicationError::FilesExist {
            root: PathBuf::from("/w"),
            paths: vec![PathBuf::from("index.ts"), PathBuf::from("tsconfig.json")],
        };
        let msg = err.to_string();
        assert!(msg.contains("index.ts"));
        assert!(msg.contains("tsconfig.json"));

        let suggestions = err.suggestions();
        assert!(suggestions.contains(&"  - index.ts".to_string()));
        assert!(suggestions.contains(&"  - tsconfig.json".to_string()));
    }

    #[test]
    fn installer_failure_reports_exit_code() {
        let err = ApplicationError::InstallerFailed {
            command: "yarn install".into(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "'yarn install' failed with exit code 1");
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn installer_killed_by_signal() {
        let err = ApplicationError::InstallerFailed {
            command: "yarn install".into(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn conflicts_are_categorised_as_conflict() {
        let err = ApplicationError::DirectoryExists {
            path: PathBuf::from("/w/app"),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }
}
