//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tiny-ts-init-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::InstallCommand;
use crate::error::InitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tiny_ts_init_adapters::filesystem::LocalFilesystem` (production)
/// - `tiny_ts_init_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All paths handed to the port are absolute; the service joins template
/// paths onto the target directory before calling in.
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> InitResult<()>;

    /// Write content to a file. The parent directory must already exist.
    fn write_file(&self, path: &Path, content: &str) -> InitResult<()>;

    /// Check if anything (file, directory, or link) exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// How an external command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running external programs.
///
/// Implemented by:
/// - `tiny_ts_init_adapters::process::ProcessRunner` (production)
///
/// Implementations connect stdin, stdout, and stderr straight to the
/// invoking terminal and block until the program exits. A program that
/// cannot be started is an error; a program that starts and fails is a
/// non-successful [`CommandStatus`].
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &InstallCommand, working_dir: &Path) -> InitResult<CommandStatus>;
}
