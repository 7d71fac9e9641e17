//! Application services - orchestrate use cases.

pub mod init_service;

pub use init_service::InitService;
