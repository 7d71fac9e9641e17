//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the pieces it needs
//! (the [`InstallCommand`] and the fallback package name).
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `TINY_TS_INIT_<SECTION>__<KEY>`, e.g.
//!    `TINY_TS_INIT_INSTALLER__PROGRAM=pnpm` or
//!    `TINY_TS_INIT_INSTALLER__ARGS="install --silent"`
//! 2. Config file: `--config <FILE>` (must exist) or the platform default
//!    location (optional)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use tiny_ts_init_core::domain::InstallCommand;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "TINY_TS_INIT";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Package-manager invocation run after the files are written.
    pub installer: InstallCommand,
    /// Project settings.
    pub project: ProjectSettings,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Manifest name used when initialising the current directory.
    pub default_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            installer: InstallCommand::default(),
            project: ProjectSettings {
                default_name: "typescript-project".into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist. Without it the platform default location is read if
    /// present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };

        let settings = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(" ")
                    .with_list_parse_key("installer.args")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| match config_file {
                Some(path) => format!("Failed to read configuration from {}", path.display()),
                None => "Failed to read configuration".to_string(),
            })?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.installer.program.trim().is_empty() {
            anyhow::bail!("installer.program must not be empty");
        }
        if self.project.default_name.trim().is_empty() {
            anyhow::bail!("project.default_name must not be empty");
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tiny-ts-init.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tiny-ts-init", "tiny-ts-init")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tiny-ts-init.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_installer_is_yarn_install() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.installer.program, "yarn");
        assert_eq!(cfg.installer.args, vec!["install".to_string()]);
    }

    #[test]
    fn default_project_name() {
        assert_eq!(
            AppConfig::default().project.default_name,
            "typescript-project"
        );
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, AppConfig::default());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let file = write_config(
            "[installer]\nprogram = \"pnpm\"\nargs = [\"install\", \"--silent\"]\n",
        );
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.installer.program, "pnpm");
        assert_eq!(cfg.installer.args, vec!["install", "--silent"]);
        // untouched sections keep their defaults
        assert_eq!(cfg.project.default_name, "typescript-project");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let missing = PathBuf::from("/definitely/not/here/tiny-ts-init.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn empty_program_is_rejected() {
        let file = write_config("[installer]\nprogram = \"  \"\n");
        let err = AppConfig::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("installer.program"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
