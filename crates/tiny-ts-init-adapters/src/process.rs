//! Subprocess adapter using `std::process::Command`.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use tiny_ts_init_core::{
    application::{
        ApplicationError,
        ports::{CommandRunner, CommandStatus},
    },
    domain::InstallCommand,
    error::InitResult,
};

/// Runs programs as child processes attached to the current terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessRunner {
    #[instrument(skip_all, fields(command = %command, dir = %working_dir.display()))]
    fn run(&self, command: &InstallCommand, working_dir: &Path) -> InitResult<CommandStatus> {
        debug!("Spawning child process");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::InstallerUnavailable {
                program: command.program.clone(),
                reason: describe_spawn_error(&e),
            })?;

        debug!(code = ?status.code(), "Child process exited");
        Ok(CommandStatus { code: status.code() })
    }
}

fn describe_spawn_error(e: &io::Error) -> String {
    match e.kind() {
        io::ErrorKind::NotFound => "program not found on PATH".into(),
        io::ErrorKind::PermissionDenied => "permission denied".into(),
        _ => e.to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tiny_ts_init_core::error::InitError;

    #[test]
    fn successful_program_reports_zero() {
        let temp = TempDir::new().unwrap();
        let status = ProcessRunner::new()
            .run(&InstallCommand::new("true", Vec::<String>::new()), temp.path())
            .unwrap();
        assert!(status.success());
    }

    #[test]
    fn failing_program_reports_exit_code() {
        let temp = TempDir::new().unwrap();
        let status = ProcessRunner::new()
            .run(&InstallCommand::new("sh", ["-c", "exit 3"]), temp.path())
            .unwrap();
        assert_eq!(status.code, Some(3));
        assert!(!status.success());
    }

    #[test]
    fn runs_inside_working_dir() {
        let temp = TempDir::new().unwrap();
        ProcessRunner::new()
            .run(&InstallCommand::new("sh", ["-c", "touch marker"]), temp.path())
            .unwrap();
        assert!(temp.path().join("marker").exists());
    }

    #[test]
    fn missing_program_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let err = ProcessRunner::new()
            .run(
                &InstallCommand::new("tiny-ts-init-no-such-program", ["install"]),
                temp.path(),
            )
            .unwrap_err();
        match err {
            InitError::Application(ApplicationError::InstallerUnavailable { program, reason }) => {
                assert_eq!(program, "tiny-ts-init-no-such-program");
                assert!(reason.contains("not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
