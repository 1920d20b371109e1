//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use kinfolk_domain::Category;
use std::path::PathBuf;

/// Kinfolk - Keep track of your people and how they are related.
#[derive(Debug, Parser)]
#[command(name = "kinfolk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Database file (overrides the configured one)
    #[arg(long, global = true, env = "KINFOLK_DB")]
    pub db: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KINFOLK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

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
    /// Add a contact
    Add(AddArgs),

    /// List all contacts
    List,

    /// Show a contact with its parents, children and siblings
    Show(ShowArgs),

    /// Remove a contact
    Remove(RemoveArgs),

    /// Record that <PARENT> is a parent of <CHILD>
    Link(LinkArgs),

    /// Remove a parent link
    Unlink(LinkArgs),

    /// List relations inferred for a contact
    Relations(RelationsArgs),

    /// List parent/child and sibling edges for the whole family
    Edges,

    /// Record an explicit relationship between two contacts
    Relate(RelateArgs),

    /// List explicit relationships
    Relationships,

    /// Show upcoming birthdays and important dates
    Reminders(RemindersArgs),

    /// Import contacts from a JSON snapshot or a vCard file
    Import(ImportArgs),

    /// Export contacts to a JSON snapshot or a vCard file
    Export(ExportArgs),

    /// Report malformed parent links
    Anomalies,

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// Given (first) name
    #[arg(short, long)]
    pub given: String,

    /// Family (last) name
    #[arg(long)]
    pub family: String,

    /// Birthday (YYYY-MM-DD or --MM-DD)
    #[arg(short, long)]
    pub birthday: Option<String>,

    /// Category
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,

    /// Parent contact id (at most two)
    #[arg(short, long = "parent")]
    pub parents: Vec<String>,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Contact id
    pub id: String,
}

/// Arguments for the remove command.
#[derive(Debug, Parser)]
pub struct RemoveArgs {
    /// Contact id
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the link and unlink commands.
#[derive(Debug, Parser)]
pub struct LinkArgs {
    /// Child contact id
    pub child: String,

    /// Parent contact id
    pub parent: String,
}

/// Arguments for the relations command.
#[derive(Debug, Parser)]
pub struct RelationsArgs {
    /// Contact id
    pub id: String,

    /// Only relations beyond parents, children and siblings
    #[arg(short, long)]
    pub extended: bool,
}

/// Arguments for the relate command.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// First contact id
    pub first: String,

    /// Second contact id
    pub second: String,

    /// What the first contact is to the second (e.g. "Mentor")
    #[arg(long = "as")]
    pub label: String,

    /// What the second contact is to the first; defaults to the same label
    #[arg(long)]
    pub reverse: Option<String>,
}

/// Arguments for the reminders command.
#[derive(Debug, Parser)]
pub struct RemindersArgs {
    /// Days ahead to look (overrides the configured window)
    #[arg(short, long)]
    pub days: Option<u32>,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// File to read (.json or .vcf)
    pub file: PathBuf,

    /// Replace all stored contacts and relationships instead of merging
    #[arg(long)]
    pub replace: bool,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// File to write (.json or .vcf); defaults to relationships-<date>.json
    pub file: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Set the database file
    SetDb {
        /// Database path
        path: PathBuf,
    },

    /// Set the reminder window
    SetWindow {
        /// Days ahead to look
        days: u32,
    },
}

/// Category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// Relatives
    Family,
    /// Close friends
    CloseFriends,
    /// Friends
    Friends,
    /// Work colleagues
    Colleagues,
    /// Acquaintances
    Acquaintances,
    /// Anything else
    Other,
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

impl From<CategoryArg> for Category {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::Family => Category::Family,
            CategoryArg::CloseFriends => Category::CloseFriends,
            CategoryArg::Friends => Category::Friends,
            CategoryArg::Colleagues => Category::Colleagues,
            CategoryArg::Acquaintances => Category::Acquaintances,
            CategoryArg::Other => Category::Other,
        }
    }
}
