//! Init Service - the provisioning workflow.
//!
//! The run is strictly sequential and each phase must finish before the
//! next begins:
//! 1. Provision: create the target directory (new-directory mode only) and
//!    refuse to continue if any template file is already present
//! 2. Materialize: write every template in order
//! 3. Install: run the package manager inside the target directory
//!
//! Failures abort immediately. Nothing written before a failure is removed.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
    },
    domain::{InstallCommand, ProjectConfig, TemplateSet},
    error::InitResult,
};

/// Main provisioning service.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl InitService {
    /// Create a new init service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tiny_ts_init_core::application::{InitService, ports::*};
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) {
    /// let service = InitService::new(
    ///     filesystem, // impl Filesystem
    ///     runner,     // impl CommandRunner
    /// );
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, runner: Box<dyn CommandRunner>) -> Self {
        Self { filesystem, runner }
    }

    /// Prepare the target directory.
    ///
    /// In new-directory mode the directory must not exist yet and is created
    /// with all missing parents. In both modes every template path is then
    /// checked, and all conflicts are reported together.
    #[instrument(skip_all, fields(target = %config.target_dir().display(), new_dir = config.is_new_dir()))]
    pub fn provision(&self, config: &ProjectConfig, templates: &TemplateSet) -> InitResult<()> {
        templates.validate()?;

        self.ensure_target_dir(config)?;
        self.check_existing_files(config, templates)?;

        debug!("Target directory is ready");
        Ok(())
    }

    /// Write every template under the target directory, in order.
    ///
    /// Returns the absolute paths written.
    #[instrument(skip_all, fields(target = %config.target_dir().display(), files = templates.len()))]
    pub fn materialize(
        &self,
        config: &ProjectConfig,
        templates: &TemplateSet,
    ) -> InitResult<Vec<PathBuf>> {
        let root = config.target_dir();
        let mut written = Vec::with_capacity(templates.len());

        for entry in templates {
            let path = root.join(entry.path());

            if let Some(parent) = path.parent() {
                if !self.filesystem.exists(parent) {
                    debug!(dir = %parent.display(), "Creating directory");
                    self.filesystem.create_dir_all(parent)?;
                }
            }

            let content = entry.render()?;
            self.filesystem.write_file(&path, &content)?;
            debug!(file = %entry.path().display(), bytes = content.len(), "Wrote template");

            written.push(path);
        }

        info!(count = written.len(), "Templates written");
        Ok(written)
    }

    /// Run the package manager inside the target directory.
    #[instrument(skip_all, fields(command = %command, target = %config.target_dir().display()))]
    pub fn install(&self, config: &ProjectConfig, command: &InstallCommand) -> InitResult<()> {
        info!("Running installer");

        let status = self.runner.run(command, config.target_dir())?;
        if !status.success() {
            return Err(ApplicationError::InstallerFailed {
                command: command.to_string(),
                code: status.code,
            }
            .into());
        }

        info!("Installer finished");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_target_dir(&self, config: &ProjectConfig) -> InitResult<()> {
        if !config.is_new_dir() {
            return Ok(());
        }

        let dir = config.target_dir();
        if self.filesystem.exists(dir) {
            return Err(ApplicationError::DirectoryExists {
                path: dir.to_path_buf(),
            }
            .into());
        }

        self.filesystem.create_dir_all(dir)?;
        info!(dir = %dir.display(), "Created project directory");
        Ok(())
    }

    fn check_existing_files(
        &self,
        config: &ProjectConfig,
        templates: &TemplateSet,
    ) -> InitResult<()> {
        let root = config.target_dir();
        let existing: Vec<PathBuf> = templates
            .paths()
            .filter(|path| self.filesystem.exists(&root.join(path)))
            .map(|path| path.to_path_buf())
            .collect();

        if existing.is_empty() {
            return Ok(());
        }

        Err(ApplicationError::FilesExist {
            root: root.to_path_buf(),
            paths: existing,
        }
        .into())
    }
}
