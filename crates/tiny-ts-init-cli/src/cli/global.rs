//! Flags that shape how a run reports, not what it writes.
//!
//! Flattened into [`super::Cli`] so `tiny-ts-init -v my-app` and
//! `tiny-ts-init my-app -v` both work.

use clap::Args;
use clap::builder::FalseyValueParser;
use std::path::PathBuf;

/// Logging, colour, config and output-format switches.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Stderr log level: warnings by default, `-v` adds progress, `-vv`
    /// each file written, `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Show more log output (-v, -vv, -vvv)",
        long_help = "Log level on stderr:
    (none)  - warnings and errors
    -v      - workflow phases and installer start/finish
    -vv     - every directory and file written
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Only errors; progress lines and next steps are dropped.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Plain output. Any non-empty `NO_COLOR` other than a falsey value
    /// (`0`, `false`, `no`, `off`) turns colour off, see
    /// <https://no-color.org>.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file with `[installer]`, `[project]` and `[output]` settings.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Read settings from FILE instead of the user config"
    )]
    pub config: Option<PathBuf>,

    /// Rendering of progress and dry-run output on stdout.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured status lines.
    Human,
    /// Status lines without ANSI codes.
    Plain,
    /// `--dry-run` prints a JSON report.
    Json,
}
