//! The initialization workflow behind a bare `tiny-ts-init` invocation.
//!
//! Responsibility: turn the positional argument into a `ProjectConfig`,
//! drive the core `InitService` phase by phase, and report progress.
//! No filesystem rules live here.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use tiny_ts_init_adapters::{LocalFilesystem, ProcessRunner, typescript_starter};
use tiny_ts_init_core::{
    application::InitService,
    domain::{InstallCommand, ProjectConfig, TemplateSet},
    error::InitError,
};

use crate::{
    cli::{InitArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the initialization workflow in the process working directory.
///
/// Dispatch sequence:
/// 1. Resolve the target directory from the positional argument
/// 2. Build the starter template set for the resolved package name
/// 3. Early-exit if `--dry-run`
/// 4. Provision, materialize, then install (unless `--skip-install`)
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(args = ?args.targets))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir()
        .with_cli_context(|| "Failed to determine the current directory")?;

    let (project, templates) = plan(&args.targets, &cwd, &config)?;

    if args.dry_run {
        return report_dry_run(&project, &templates, &config, &args, &output);
    }

    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
    );
    run_workflow(&service, &project, &templates, &config, &args, &cwd, &output)
}

/// Resolve the target and build the matching template set.
///
/// Touches nothing on disk, so argument errors surface before any
/// filesystem access.
fn plan(
    targets: &[String],
    cwd: &Path,
    config: &AppConfig,
) -> CliResult<(ProjectConfig, TemplateSet)> {
    let project = ProjectConfig::resolve(targets, cwd).map_err(InitError::from)?;
    let name = project.manifest_name(&config.project.default_name);

    debug!(
        target = %project.target_dir().display(),
        new_dir = project.is_new_dir(),
        package = %name,
        "Target resolved"
    );

    Ok((project, typescript_starter(&name)))
}

fn run_workflow(
    service: &InitService,
    project: &ProjectConfig,
    templates: &TemplateSet,
    config: &AppConfig,
    args: &InitArgs,
    cwd: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!(
        "Initializing TypeScript project in {}",
        project.target_dir().display()
    ))?;

    service.provision(project, templates)?;
    let written = service.materialize(project, templates)?;
    info!(files = written.len(), "Project files written");
    output.success("Files created successfully!")?;

    if args.skip_install {
        output.warning(&format!(
            "Skipped dependency installation; run '{}' in {} when ready",
            config.installer,
            project.target_dir().display()
        ))?;
    } else {
        output.info("Installing dependencies...")?;
        service.install(project, &config.installer)?;
    }

    output.print("")?;
    output.success("TypeScript project initialized successfully!")?;
    print_next_steps(project, cwd, &config.installer, output)?;
    Ok(())
}

fn print_next_steps(
    project: &ProjectConfig,
    cwd: &Path,
    installer: &InstallCommand,
    output: &OutputManager,
) -> CliResult<()> {
    let pm = &installer.program;

    output.print("")?;
    output.print("Available commands:")?;
    output.print(&format!("  {pm} start    - Run the TypeScript file"))?;
    output.print(&format!("  {pm} lint     - Check for linting issues"))?;
    output.print(&format!("  {pm} format   - Format all files with Prettier"))?;

    if let Some(dir) = cd_hint(project, cwd) {
        output.print("")?;
        output.print("To get started:")?;
        output.print(&format!("  cd {}", dir.display()))?;
        output.print(&format!("  {pm} start"))?;
    }
    Ok(())
}

/// Directory to `cd` into after a new-directory run: relative to `cwd` when
/// the target lies below it, absolute otherwise.
fn cd_hint(project: &ProjectConfig, cwd: &Path) -> Option<PathBuf> {
    if !project.is_new_dir() {
        return None;
    }
    let target = project.target_dir();
    Some(
        target
            .strip_prefix(cwd)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| target.to_path_buf()),
    )
}

// ── Dry run ───────────────────────────────────────────────────────────────────

/// What a run would do, as printed by `--dry-run --output-format json`.
#[derive(Debug, Serialize)]
struct DryRunReport {
    target_dir: PathBuf,
    new_dir: bool,
    files: Vec<PathBuf>,
    install: Option<String>,
}

impl DryRunReport {
    fn new(
        project: &ProjectConfig,
        templates: &TemplateSet,
        config: &AppConfig,
        args: &InitArgs,
    ) -> Self {
        Self {
            target_dir: project.target_dir().to_path_buf(),
            new_dir: project.is_new_dir(),
            files: templates.paths().map(Path::to_path_buf).collect(),
            install: (!args.skip_install).then(|| config.installer.to_string()),
        }
    }
}

fn report_dry_run(
    project: &ProjectConfig,
    templates: &TemplateSet,
    config: &AppConfig,
    args: &InitArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let report = DryRunReport::new(project, templates, config, args);

    if output.format() == OutputFormat::Json {
        output.raw(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: would initialize {}{}",
        report.target_dir.display(),
        if report.new_dir { " (new directory)" } else { "" }
    ))?;
    for file in &report.files {
        output.print(&format!("  {}", file.display()))?;
    }
    match &report.install {
        Some(command) => output.info(&format!("Then run: {command}"))?,
        None => output.info("Dependency installation skipped")?,
    }
    Ok(())
}
