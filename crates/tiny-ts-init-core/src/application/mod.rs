//! Application layer for tiny-ts-init.
//!
//! This layer contains:
//! - **Services**: the provisioning workflow ([`InitService`])
//! - **Ports**: Interface definitions (traits) for the filesystem and
//!   external processes
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the workflow; the rules about what a
//! valid project location or template set is live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::InitService;

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, CommandStatus, Filesystem};

pub use error::ApplicationError;
