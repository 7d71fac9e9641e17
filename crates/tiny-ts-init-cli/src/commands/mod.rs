//! Command handlers.
//!
//! Each handler owns one user-visible operation and returns a
//! [`crate::error::CliResult`]; `main` maps failures to exit codes.

pub mod completions;
pub mod init;
