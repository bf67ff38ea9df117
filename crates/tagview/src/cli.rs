//! Clap derive structures for the `tagview` CLI.
//!
//! Defines the command tree, global flags, and shared enums.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tagview -- inspect telemetry edges, tags, and widget customization
#[derive(Debug, Parser)]
#[command(
    name = "tagview",
    version,
    about = "Inspect telemetry edges, tags, and widget customization",
    long_about = "A CLI for the tagview dashboard backend.\n\n\
        Lists monitored edges, shows classified current tag values, and\n\
        resolves the widget customization store into concrete widget\n\
        instances -- including every degraded state a dashboard would show.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "TAGVIEW_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 's', env = "TAGVIEW_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "TAGVIEW_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "TAGVIEW_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "TAGVIEW_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List monitored edges
    #[command(alias = "e")]
    Edges,

    /// Show classified current tag values for an edge
    #[command(alias = "cur")]
    Currents(CurrentsArgs),

    /// Resolve widget instances for an edge's customized tags
    #[command(alias = "w")]
    Widgets(WidgetsArgs),

    /// Show normalized history rows for an edge
    #[command(alias = "hist")]
    History(HistoryArgs),

    /// Show or locate the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CurrentsArgs {
    /// Edge id
    pub edge: String,
}

#[derive(Debug, Args)]
pub struct WidgetsArgs {
    /// Edge id
    pub edge: String,

    /// Include tags without any customization
    #[arg(long, short = 'a')]
    pub all: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Edge id
    pub edge: String,

    /// Restrict to these tag ids (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Number of most recent rows to show
    #[arg(long, short = 'n', default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
