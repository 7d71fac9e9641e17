//! Core domain layer for tiny-ts-init.
//!
//! Pure data and rules with no I/O. Filesystem and subprocess concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! - [`ProjectConfig`]: where the project goes and whether the directory is new
//! - [`TemplateSet`]: the ordered, fixed list of files to write
//! - [`InstallCommand`]: the package-manager invocation run afterwards

pub mod error;
pub mod install_command;
pub mod project_config;
pub mod template_set;

pub use error::DomainError;
pub use install_command::InstallCommand;
pub use project_config::{CURRENT_DIR_MARKER, ProjectConfig};
pub use template_set::{TemplateContent, TemplateEntry, TemplateSet};
