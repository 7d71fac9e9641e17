//! Infrastructure adapters for tiny-ts-init.
//!
//! This crate implements the ports defined in
//! `tiny-ts-init-core::application::ports` and ships the built-in template
//! set. It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use builtin_templates::typescript_starter;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::ProcessRunner;
