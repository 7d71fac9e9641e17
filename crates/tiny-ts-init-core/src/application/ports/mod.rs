//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `tiny-ts-init-adapters`
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence checks, directory creation, file writes
//!   - `CommandRunner`: run an external program with inherited stdio

pub mod output;

pub use output::{CommandRunner, CommandStatus, Filesystem};

#[cfg(test)]
pub use output::{MockCommandRunner, MockFilesystem};
