//! Integration tests for the provisioning workflow against the in-memory
//! filesystem and the built-in starter.

use std::path::{Path, PathBuf};

use mockall::mock;
use mockall::predicate::eq;

use tiny_ts_init_adapters::{MemoryFilesystem, typescript_starter};
use tiny_ts_init_core::{
    application::{ApplicationError, InitService},
    domain::{InstallCommand, ProjectConfig, TemplateSet},
    error::{InitError, InitResult},
    prelude::{CommandRunner, CommandStatus, Filesystem},
};

mock! {
    Runner {}
    impl CommandRunner for Runner {
        fn run(&self, command: &InstallCommand, working_dir: &Path) -> InitResult<CommandStatus>;
    }
}

fn cwd() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\work")
    } else {
        PathBuf::from("/work")
    }
}

fn idle_runner() -> MockRunner {
    let mut runner = MockRunner::new();
    runner.expect_run().never();
    runner
}

fn expected_files(root: &Path, templates: &TemplateSet) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = templates.paths().map(|p| root.join(p)).collect();
    files.sort();
    files
}

/// provision + materialize, the part of a run that touches the filesystem.
fn scaffold(
    fs: &MemoryFilesystem,
    runner: MockRunner,
    config: &ProjectConfig,
    templates: &TemplateSet,
) -> InitResult<Vec<PathBuf>> {
    let service = InitService::new(Box::new(fs.clone()), Box::new(runner));
    service.provision(config, templates)?;
    service.materialize(config, templates)
}

#[test]
fn fresh_new_directory_gets_exactly_the_template_set() {
    let fs = MemoryFilesystem::new().with_directory(cwd());
    let config = ProjectConfig::resolve(&["my-app"], &cwd()).unwrap();
    let templates = typescript_starter(&config.manifest_name("typescript-project"));

    scaffold(&fs, idle_runner(), &config, &templates).unwrap();

    let root = cwd().join("my-app");
    assert!(fs.is_dir(&root));
    assert!(fs.is_dir(&root.join(".vscode")));
    assert_eq!(fs.list_files(), expected_files(&root, &templates));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs.read_file(&root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest["name"], "my-app");
    for script in ["start", "lint", "format"] {
        assert!(manifest["scripts"].get(script).is_some());
    }
}

#[test]
fn current_directory_run_writes_in_place() {
    let fs = MemoryFilesystem::new().with_directory(cwd());
    let config = ProjectConfig::resolve(&["."], &cwd()).unwrap();
    let templates = typescript_starter(&config.manifest_name("typescript-project"));

    scaffold(&fs, idle_runner(), &config, &templates).unwrap();

    assert_eq!(fs.list_files(), expected_files(&cwd(), &templates));
    let manifest = fs.read_file(&cwd().join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"typescript-project\""));
}

#[test]
fn existing_target_directory_is_rejected_and_nothing_written() {
    let fs = MemoryFilesystem::new().with_directory(cwd().join("taken"));
    let config = ProjectConfig::resolve(&["taken"], &cwd()).unwrap();

    let err = scaffold(&fs, idle_runner(), &config, &typescript_starter("taken")).unwrap_err();

    assert!(matches!(
        err,
        InitError::Application(ApplicationError::DirectoryExists { .. })
    ));
    assert!(fs.list_files().is_empty());
}

#[test]
fn conflicting_file_blocks_every_write() {
    let existing = cwd().join("tsconfig.json");
    let fs = MemoryFilesystem::new().with_file(&existing, "{}");
    let config = ProjectConfig::current_dir(&cwd());

    let err = scaffold(&fs, idle_runner(), &config, &typescript_starter("x")).unwrap_err();

    match err {
        InitError::Application(ApplicationError::FilesExist { paths, .. }) => {
            assert_eq!(paths, vec![PathBuf::from("tsconfig.json")]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fs.list_files(), vec![existing]);
    assert!(!fs.exists(&cwd().join(".vscode")));
}

#[test]
fn unrelated_files_in_current_directory_are_fine() {
    let fs = MemoryFilesystem::new().with_file(cwd().join("README.md"), "# hi");
    let config = ProjectConfig::current_dir(&cwd());

    scaffold(&fs, idle_runner(), &config, &typescript_starter("x")).unwrap();

    assert_eq!(fs.read_file(&cwd().join("README.md")).as_deref(), Some("# hi"));
}

#[test]
fn second_run_on_same_path_fails_without_touching_first_output() {
    let fs = MemoryFilesystem::new().with_directory(cwd());
    let config = ProjectConfig::resolve(&["twice"], &cwd()).unwrap();
    let templates = typescript_starter("twice");

    scaffold(&fs, idle_runner(), &config, &templates).unwrap();
    let before: Vec<_> = fs
        .list_files()
        .into_iter()
        .map(|p| (fs.read_file(&p), p))
        .collect();

    let err = scaffold(&fs, idle_runner(), &config, &templates).unwrap_err();
    assert!(matches!(
        err,
        InitError::Application(ApplicationError::DirectoryExists { .. })
    ));

    let after: Vec<_> = fs
        .list_files()
        .into_iter()
        .map(|p| (fs.read_file(&p), p))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn write_failure_aborts_remaining_writes_without_rollback() {
    let fs = MemoryFilesystem::new()
        .with_directory(cwd())
        .fail_writes_to(cwd().join("tsconfig.json"));
    let config = ProjectConfig::current_dir(&cwd());

    let err = scaffold(&fs, idle_runner(), &config, &typescript_starter("x")).unwrap_err();

    assert!(matches!(
        err,
        InitError::Application(ApplicationError::FilesystemError { .. })
    ));
    // Files before tsconfig.json stay; nothing after it is written.
    let mut expected = vec![
        cwd().join("index.ts"),
        cwd().join("package.json"),
        cwd().join(".yarnrc.yml"),
    ];
    expected.sort();
    assert_eq!(fs.list_files(), expected);
}

#[test]
fn install_runs_after_materialize_in_target_dir() {
    let fs = MemoryFilesystem::new().with_directory(cwd());
    let config = ProjectConfig::resolve(&["app"], &cwd()).unwrap();
    let templates = typescript_starter("app");
    let command = InstallCommand::default();

    let mut runner = MockRunner::new();
    let probe = fs.clone();
    let manifest = cwd().join("app").join("package.json");
    runner
        .expect_run()
        .with(eq(command.clone()), eq(cwd().join("app")))
        .times(1)
        .returning(move |_, _| {
            // Every file is on disk before the installer starts.
            assert!(probe.exists(&manifest));
            Ok(CommandStatus::from_code(0))
        });

    let service = InitService::new(Box::new(fs.clone()), Box::new(runner));
    service.provision(&config, &templates).unwrap();
    service.materialize(&config, &templates).unwrap();
    service.install(&config, &command).unwrap();
}

#[test]
fn installer_failure_leaves_files_in_place() {
    let fs = MemoryFilesystem::new().with_directory(cwd());
    let config = ProjectConfig::current_dir(&cwd());
    let templates = typescript_starter("x");

    let mut runner = MockRunner::new();
    runner
        .expect_run()
        .returning(|_, _| Ok(CommandStatus::from_code(1)));

    let service = InitService::new(Box::new(fs.clone()), Box::new(runner));
    service.provision(&config, &templates).unwrap();
    service.materialize(&config, &templates).unwrap();
    let err = service
        .install(&config, &InstallCommand::default())
        .unwrap_err();

    assert!(matches!(
        err,
        InitError::Application(ApplicationError::InstallerFailed { code: Some(1), .. })
    ));
    assert_eq!(fs.list_files().len(), templates.len());
}
