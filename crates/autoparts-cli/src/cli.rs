//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Autoparts CLI - Search the parts catalog and its analogs.
#[derive(Debug, Parser)]
#[command(name = "autoparts")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AUTOPARTS_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite catalog database
    #[arg(long, global = true, env = "AUTOPARTS_DB")]
    pub db: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search parts by part number or text, with analogs
    Search(SearchArgs),

    /// List the analogs of one part
    Analogs(AnalogsArgs),

    /// Show how two parts are related
    Relation(RelationArgs),

    /// Autocomplete suggestions
    Suggest(SuggestArgs),

    /// List the groups of interchangeable parts
    Groups,
}

/// Pricing options shared by commands that list parts.
#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct PricingArgs {
    /// Show base prices and markup
    #[arg(long)]
    pub admin: bool,

    /// Markup percentage instead of the configured default
    #[arg(short, long, allow_negative_numbers = true)]
    pub markup: Option<f64>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Part number (e.g. OC-90) or free text
    pub query: String,

    #[command(flatten)]
    pub pricing: PricingArgs,
}

/// Arguments for the analogs command.
#[derive(Debug, Parser)]
pub struct AnalogsArgs {
    /// Part id
    pub id: i64,

    #[command(flatten)]
    pub pricing: PricingArgs,
}

/// Arguments for the relation command.
#[derive(Debug, Parser)]
pub struct RelationArgs {
    /// First part id
    pub first: i64,

    /// Second part id
    pub second: i64,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Beginning of a name, manufacturer or part number
    pub query: String,

    /// Suggest part numbers instead of names
    #[arg(short, long)]
    pub part_number: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl TryFrom<PricingArgs> for autoparts_search::Viewer {
    type Error = crate::error::CliError;

    fn try_from(args: PricingArgs) -> Result<Self, Self::Error> {
        if let Some(markup) = args.markup {
            if !markup.is_finite() || markup <= -100.0 {
                return Err(crate::error::CliError::InvalidInput(
                    "Markup must be a finite percentage above -100".to_string(),
                ));
            }
        }

        Ok(Self {
            is_admin: args.admin,
            markup_percent: args.markup,
        })
    }
}
