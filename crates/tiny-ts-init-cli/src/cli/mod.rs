//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tiny-ts-init",
    bin_name = "tiny-ts-init",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap a minimal TypeScript project",
    long_about = "tiny-ts-init writes a starter index.ts together with package.json, \
                  tsconfig, ESLint, Prettier and VS Code settings, then installs the \
                  dependencies with yarn.",
    after_help = "EXAMPLES:\n\
        \x20 tiny-ts-init          # use current directory\n\
        \x20 tiny-ts-init .        # use current directory\n\
        \x20 tiny-ts-init my-app   # create and use my-app directory\n\
        \x20 tiny-ts-init --completions bash > ~/.local/share/bash-completion/completions/tiny-ts-init",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Target directory and workflow switches.
    #[command(flatten)]
    pub init: InitArgs,

    /// Print a completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// Arguments of the initialization workflow.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory.
    ///
    /// Collected as a list so that extra positionals reach the resolver,
    /// which reports them as a usage error.
    #[arg(
        value_name = "DIR",
        help = "Directory to create ('.' or omitted for the current directory)"
    )]
    pub targets: Vec<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Write the files but do not run the package manager.
    #[arg(long = "skip-install", help = "Do not install dependencies")]
    pub skip_install: bool,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
