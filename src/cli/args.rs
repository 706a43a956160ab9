//! CLI argument definitions
//!
//! All Clap derive structs for `nbmyst` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::{BookPaths, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_TOC};
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Rewrite Jupyter notebook cells into MyST figures and admonitions.
#[derive(Parser, Debug)]
#[command(name = "nbmyst", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "NBMYST_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "NBMYST_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every notebook in the table of contents into the book directory.
    Convert(ConvertArgs),

    /// Convert without writing output, failing on the first malformed notebook.
    Check(CheckArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Convert / Check
// ============================================================================

/// Input locations shared by `convert` and `check`.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the Jupyter Book table of contents.
    #[arg(long, default_value = DEFAULT_TOC, env = "NBMYST_TOC")]
    pub toc: PathBuf,

    /// Directory holding the source notebooks.
    #[arg(long, default_value = DEFAULT_INPUT_DIR, env = "NBMYST_INPUT_DIR")]
    pub input_dir: PathBuf,
}

/// Arguments for `convert`.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory the converted notebooks are written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "NBMYST_OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

impl ConvertArgs {
    /// Resolves the run paths.
    #[must_use]
    pub fn paths(&self) -> BookPaths {
        BookPaths {
            toc: self.source.toc.clone(),
            input_dir: self.source.input_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for the summary.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// Resolves the run paths; nothing is written in check mode.
    #[must_use]
    pub fn paths(&self) -> BookPaths {
        BookPaths {
            toc: self.source.toc.clone(),
            input_dir: self.source.input_dir.clone(),
            ..BookPaths::default()
        }
    }
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
