use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// Argument that selects the current working directory.
pub const CURRENT_DIR_MARKER: &str = ".";

/// Where the project is created and whether that directory is new.
///
/// Built once from the command line by [`ProjectConfig::resolve`] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    target_dir: PathBuf,
    is_new_dir: bool,
}

impl ProjectConfig {
    /// Resolve the positional arguments against `cwd`.
    ///
    /// - no argument, an empty argument, or `.` → reuse `cwd` in place
    /// - any other single argument → a new directory relative to `cwd`
    ///   (absolute arguments are taken as-is)
    /// - more than one argument → [`DomainError::TooManyArguments`]
    pub fn resolve<S: AsRef<str>>(args: &[S], cwd: &Path) -> Result<Self, DomainError> {
        if args.len() > 1 {
            return Err(DomainError::TooManyArguments { count: args.len() });
        }
        if !cwd.is_absolute() {
            return Err(DomainError::RelativeWorkingDirectory {
                path: cwd.display().to_string(),
            });
        }

        let dir_arg = args
            .first()
            .map(AsRef::as_ref)
            .filter(|arg| !arg.is_empty())
            .unwrap_or(CURRENT_DIR_MARKER);

        if dir_arg == CURRENT_DIR_MARKER {
            return Ok(Self::current_dir(cwd));
        }

        Ok(Self {
            target_dir: normalize(&cwd.join(dir_arg)),
            is_new_dir: true,
        })
    }

    /// Operate on `cwd` in place.
    pub fn current_dir(cwd: &Path) -> Self {
        Self {
            target_dir: normalize(cwd),
            is_new_dir: false,
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn is_new_dir(&self) -> bool {
        self.is_new_dir
    }

    /// Final path segment of the target directory, if it has one.
    pub fn dir_name(&self) -> Option<&str> {
        self.target_dir.file_name().and_then(|n| n.to_str())
    }

    /// Package name for the manifest: the new directory's name, or
    /// `fallback` when working in place.
    pub fn manifest_name(&self, fallback: &str) -> String {
        match (self.is_new_dir, self.dir_name()) {
            (true, Some(name)) => name.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Lexically collapse `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from(r"C:\work")
        } else {
            PathBuf::from("/work")
        }
    }

    fn resolve(args: &[&str]) -> Result<ProjectConfig, DomainError> {
        ProjectConfig::resolve(args, &cwd())
    }

    #[test]
    fn no_argument_uses_current_directory() {
        let config = resolve(&[]).unwrap();
        assert!(!config.is_new_dir());
        assert_eq!(config.target_dir(), cwd());
    }

    #[test]
    fn dot_argument_uses_current_directory() {
        let config = resolve(&["."]).unwrap();
        assert!(!config.is_new_dir());
        assert_eq!(config.target_dir(), cwd());
    }

    #[test]
    fn empty_argument_uses_current_directory() {
        let config = resolve(&[""]).unwrap();
        assert!(!config.is_new_dir());
    }

    #[test]
    fn name_argument_creates_new_directory() {
        let config = resolve(&["my-app"]).unwrap();
        assert!(config.is_new_dir());
        assert_eq!(config.target_dir(), cwd().join("my-app"));
        assert!(config.target_dir().is_absolute());
    }

    #[test]
    fn nested_relative_path_is_resolved() {
        let config = resolve(&["apps/../tools/./cli"]).unwrap();
        assert_eq!(config.target_dir(), cwd().join("tools").join("cli"));
    }

    #[test]
    fn parent_relative_path_leaves_cwd() {
        let config = resolve(&["../sibling"]).unwrap();
        assert!(config.is_new_dir());
        assert_eq!(config.dir_name(), Some("sibling"));
        assert!(!config.target_dir().starts_with(cwd()));
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let config = resolve(&["my-app/"]).unwrap();
        assert_eq!(config.dir_name(), Some("my-app"));
    }

    #[test]
    fn two_arguments_is_usage_error() {
        assert_eq!(
            resolve(&["a", "b"]).unwrap_err(),
            DomainError::TooManyArguments { count: 2 }
        );
    }

    #[test]
    fn relative_cwd_is_rejected() {
        let err = ProjectConfig::resolve(&["app"], Path::new("relative")).unwrap_err();
        assert!(matches!(err, DomainError::RelativeWorkingDirectory { .. }));
    }

    #[test]
    fn manifest_name_for_new_directory_is_dir_name() {
        let config = resolve(&["cool-tool"]).unwrap();
        assert_eq!(config.manifest_name("typescript-project"), "cool-tool");
    }

    #[test]
    fn manifest_name_in_place_is_fallback() {
        let config = resolve(&[]).unwrap();
        assert_eq!(
            config.manifest_name("typescript-project"),
            "typescript-project"
        );
    }
}
