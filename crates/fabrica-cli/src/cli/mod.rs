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
    name    = "fabrica",
    bin_name = "fabrica",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2699} Interchangeable product-line factories",
    long_about = "Fabrica demonstrates families of related products built \
                  by interchangeable factories behind one capability surface.",
    after_help = "EXAMPLES:\n\
        \x20 fabrica demo\n\
        \x20 fabrica demo --line 2\n\
        \x20 fabrica list --format json\n\
        \x20 fabrica completions bash > /usr/share/bash-completion/completions/fabrica",
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
    /// Showcase the product lines.
    #[command(
        visible_alias = "d",
        about = "Run the product-line showcase",
        after_help = "EXAMPLES:\n\
            \x20 fabrica demo            # every registered line\n\
            \x20 fabrica demo --line 1   # first family only\n\
            \x20 fabrica demo --line two # markers and words both work"
    )]
    Demo(DemoArgs),

    /// List registered product lines.
    #[command(
        visible_alias = "ls",
        about = "List registered product lines",
        after_help = "EXAMPLES:\n\
            \x20 fabrica list\n\
            \x20 fabrica list --format json\n\
            \x20 fabrica list --format csv"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fabrica completions bash > ~/.local/share/bash-completion/completions/fabrica\n\
            \x20 fabrica completions zsh  > ~/.zfunc/_fabrica\n\
            \x20 fabrica completions fish > ~/.config/fish/completions/fabrica.fish"
    )]
    Completions(CompletionsArgs),
}

// ── demo ──────────────────────────────────────────────────────────────────────

/// Arguments for `fabrica demo`.
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Restrict the showcase to one product line.
    ///
    /// Accepts a line marker (`1`, `2`) or its word form (`one`, `two`).
    /// Without it every registered line runs, in catalog order.
    #[arg(
        short = 'l',
        long = "line",
        value_name = "LINE",
        help = "Product line to showcase (default: all)"
    )]
    pub line: Option<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `fabrica list`.
#[derive(Debug, Args)]
pub struct ListArgs {
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
    /// One marker per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fabrica completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_demo_command() {
        let cli = Cli::parse_from(["fabrica", "demo", "--line", "1"]);
        if let Commands::Demo(args) = cli.command {
            assert_eq!(args.line.as_deref(), Some("1"));
        } else {
            panic!("expected Demo command");
        }
    }

    #[test]
    fn demo_line_is_optional() {
        let cli = Cli::parse_from(["fabrica", "demo"]);
        if let Commands::Demo(args) = cli.command {
            assert!(args.line.is_none());
        } else {
            panic!("expected Demo command");
        }
    }

    #[test]
    fn demo_alias() {
        let cli = Cli::parse_from(["fabrica", "d"]);
        assert!(matches!(cli.command, Commands::Demo(_)));
    }

    #[test]
    fn list_defaults_to_table() {
        let cli = Cli::parse_from(["fabrica", "list"]);
        if let Commands::List(args) = cli.command {
            assert!(matches!(args.format, ListFormat::Table));
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn list_format_json_parses() {
        let cli = Cli::parse_from(["fabrica", "ls", "--format", "json"]);
        if let Commands::List(args) = cli.command {
            assert!(matches!(args.format, ListFormat::Json));
        } else {
            panic!("expected List command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["fabrica", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
