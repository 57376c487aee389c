//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skein",
    bin_name = "skein",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9f6} Service dependency management",
    long_about = "Skein manages the dependencies between the services of a \
                  multi-service project, declared in its manifest (skein.yaml).",
    after_help = "EXAMPLES:\n\
        \x20 skein add api database        # 'api' now depends on 'database'\n\
        \x20 skein add                     # interactive selection\n\
        \x20 skein list --format json\n\
        \x20 skein remove api database --force\n\
        \x20 skein check --provider terraform",
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
    /// Define a dependency between two services.
    #[command(
        visible_alias = "a",
        about = "Define dependencies between services",
        after_help = "EXAMPLES:\n\
            \x20 skein add api database   # 'api' depends on 'database'\n\
            \x20 skein add api            # prompt for the dependency\n\
            \x20 skein add                # prompt for both services"
    )]
    Add(AddArgs),

    /// List dependency relationships.
    #[command(
        visible_alias = "ls",
        about = "List dependencies between services",
        after_help = "EXAMPLES:\n\
            \x20 skein list\n\
            \x20 skein list api\n\
            \x20 skein list --format json"
    )]
    List(ListArgs),

    /// Remove a dependency between two services.
    #[command(
        visible_alias = "rm",
        about = "Remove dependencies between services",
        after_help = "EXAMPLES:\n\
            \x20 skein remove api database\n\
            \x20 skein remove api database --force   # skip confirmation\n\
            \x20 skein remove                        # interactive selection"
    )]
    Remove(RemoveArgs),

    /// Validate the dependency graph and preview provider expressions.
    #[command(
        about = "Check service dependencies",
        after_help = "EXAMPLES:\n\
            \x20 skein check\n\
            \x20 skein check --provider terraform\n\n\
        Findings are reported as warnings; check never fails the invocation."
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skein completions bash > ~/.local/share/bash-completion/completions/skein\n\
            \x20 skein completions zsh  > ~/.zfunc/_skein\n\
            \x20 skein completions fish > ~/.config/fish/completions/skein.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Skein configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 skein config get defaults.provider\n\
            \x20 skein config set defaults.provider terraform\n\
            \x20 skein config list"
    )]
    Config(ConfigCommands),
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `skein add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Service that gains the dependency.  Prompted for when omitted.
    #[arg(value_name = "SERVICE", help = "Service that depends on another")]
    pub service: Option<String>,

    /// Service it will depend on.  Prompted for when omitted.
    #[arg(value_name = "DEPENDENCY", help = "Service it depends on")]
    pub dependency: Option<String>,

    /// Treat an already-existing dependency as success.
    #[arg(long = "force", help = "Force overwrite of existing dependencies")]
    pub force: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `skein list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only this service.  All services when omitted.
    #[arg(value_name = "SERVICE", help = "Service to show")]
    pub service: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// JSON array of view objects.
    Json,
    /// CSV rows.
    Csv,
}

// ── remove ────────────────────────────────────────────────────────────────────

/// Arguments for `skein remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Service to remove a dependency from.  Prompted for when omitted.
    #[arg(value_name = "SERVICE", help = "Service to remove a dependency from")]
    pub service: Option<String>,

    /// The dependency to remove.  Prompted for when omitted.
    #[arg(value_name = "DEPENDENCY", help = "Dependency to remove")]
    pub dependency: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(long = "force", help = "Remove dependency without confirmation prompt")]
    pub force: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `skein check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Infrastructure provider for the expression preview.
    /// Falls back to `defaults.provider` from the configuration.
    #[arg(
        short = 'p',
        long = "provider",
        value_name = "PROVIDER",
        help = "Infrastructure provider (bicep, terraform)"
    )]
    pub provider: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skein completions`.
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

/// Subcommands for `skein config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.provider`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
