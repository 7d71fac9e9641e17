//! tiny-ts-init Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! `tiny-ts-init` project bootstrapper, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        tiny-ts-init-cli (CLI)           │
//! │   (argument parsing, output, exit code) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │              (InitService)              │
//! │   provision → materialize → install     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, CommandRunner)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   tiny-ts-init-adapters (Infrastructure)│
//! │ (LocalFilesystem, ProcessRunner, etc.)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tiny_ts_init_core::prelude::*;
//!
//! # fn demo(service: InitService, templates: TemplateSet) -> InitResult<()> {
//! let config = ProjectConfig::resolve(&["my-app"], Path::new("/home/me"))?;
//!
//! service.provision(&config, &templates)?;
//! service.materialize(&config, &templates)?;
//! service.install(&config, &InstallCommand::default())?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        InitService,
        ports::{CommandRunner, CommandStatus, Filesystem},
    };
    pub use crate::domain::{
        InstallCommand, ProjectConfig, TemplateContent, TemplateEntry, TemplateSet,
    };
    pub use crate::error::{InitError, InitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
