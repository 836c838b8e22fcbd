//! Argument surface of `hoist`, declared with clap's derive API.
//!
//! Parsing only: handlers in [`crate::commands`] receive these structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hoist",
    bin_name = "hoist",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate and inspect hoist.yml stack manifests",
    long_about = "Hoist reads the hoist.yml manifest of a stack, checks its \
                  version, stack name and services, and reports every problem \
                  it finds.",
    after_help = "EXAMPLES:\n\
        \x20 hoist validate\n\
        \x20 hoist validate ./my/stack --format json\n\
        \x20 hoist show ./my/stack\n\
        \x20 hoist init ./my/stack --stack my-stack --service api --type go --path api\n\
        \x20 hoist completions bash > /usr/share/bash-completion/completions/hoist",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load and validate a stack manifest.
    #[command(
        visible_alias = "check",
        about = "Validate hoist.yml",
        after_help = "EXAMPLES:\n\
            \x20 hoist validate             # ./hoist.yml\n\
            \x20 hoist validate my/stack    # my/stack/hoist.yml\n\
            \x20 hoist validate --format json"
    )]
    Validate(ValidateArgs),

    /// Print the canonical form of a valid manifest.
    #[command(
        about = "Print the canonical hoist.yml",
        after_help = "EXAMPLES:\n\
            \x20 hoist show\n\
            \x20 hoist show my/stack > normalized.yml"
    )]
    Show(ShowArgs),

    /// Write a new manifest.
    #[command(
        about = "Create hoist.yml",
        after_help = "EXAMPLES:\n\
            \x20 hoist init --stack my-stack\n\
            \x20 hoist init my/stack --stack my-stack --service api --type go --path api\n\
            \x20 hoist init --stack my-stack --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hoist completions bash > ~/.local/share/bash-completion/completions/hoist\n\
            \x20 hoist completions zsh  > ~/.zfunc/_hoist\n\
            \x20 hoist completions fish > ~/.config/fish/completions/hoist.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Hoist configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 hoist config get output.format\n\
            \x20 hoist config list\n\
            \x20 hoist config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `hoist validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Stack directory containing hoist.yml.
    #[arg(
        value_name = "DIR",
        help = "Stack directory (default: manifest.dir from config, then '.')"
    )]
    pub dir: Option<PathBuf>,

    /// Report format.
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Report format (default: output.format from config)"
    )]
    pub format: Option<ReportFormat>,
}

/// Output format for the `validate` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary.
    Human,
    /// JSON report on stdout.
    Json,
}

impl ReportFormat {
    /// Parse a configured format name, ignoring case.
    pub fn from_config(value: &str) -> Option<Self> {
        Self::from_str(value, true).ok()
    }
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `hoist show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Stack directory containing hoist.yml.
    #[arg(value_name = "DIR", help = "Stack directory")]
    pub dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hoist init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to write hoist.yml into.
    #[arg(value_name = "DIR", help = "Stack directory")]
    pub dir: Option<PathBuf>,

    /// Stack name.
    #[arg(short = 's', long = "stack", value_name = "NAME", help = "Stack name")]
    pub stack: String,

    /// Optional first service.
    #[arg(long = "service", value_name = "NAME", help = "Add a service")]
    pub service: Option<String>,

    /// Service type (e.g. go, node).
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        requires = "service",
        help = "Service type"
    )]
    pub kind: Option<String>,

    /// Service path relative to the manifest.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        requires = "service",
        help = "Service path (default: '.', the stack directory)"
    )]
    pub path: Option<String>,

    /// Overwrite an existing manifest.
    #[arg(long = "force", help = "Overwrite existing hoist.yml")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hoist completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `hoist config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
