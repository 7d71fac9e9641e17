//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tiny_ts_init_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{InitError, InitResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> InitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    /// Refuses to replace an existing file even if one appeared after the
    /// conflict check.
    fn write_file(&self, path: &Path, content: &str) -> InitResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "create file"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so that a dangling link still counts as taken
        std::fs::symlink_metadata(path).is_ok()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> InitError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_creates_parents() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a").join("b").join("c");

        LocalFilesystem::new().create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn write_then_exists() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("index.ts");

        assert!(!fs.exists(&file));
        fs.write_file(&file, "console.log(1);\n").unwrap();
        assert!(fs.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "console.log(1);\n");
    }

    #[test]
    fn write_never_overwrites() {
        let temp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = temp.path().join("package.json");
        std::fs::write(&file, "original").unwrap();

        let err = fs.write_file(&file, "replacement").unwrap_err();
        assert!(matches!(
            err,
            InitError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "original");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing").join("settings.json");

        assert!(LocalFilesystem::new().write_file(&file, "{}").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_existing() {
        let temp = TempDir::new().unwrap();
        let link = temp.path().join("tsconfig.json");
        std::os::unix::fs::symlink(temp.path().join("nowhere"), &link).unwrap();

        assert!(LocalFilesystem::new().exists(&link));
    }
}
