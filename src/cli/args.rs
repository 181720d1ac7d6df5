//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Explore and print Postman API collections
///
/// Resources are addressed by their names, folder by folder:
/// `pcli show users "get user" ok`.
#[derive(Parser, Debug)]
#[command(name = "pcli")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PCLI_CONFIG")]
    pub config: Option<String>,

    /// Path to a collection file
    #[arg(long, global = true, env = "PCLI_COLLECTION")]
    pub collection: Option<String>,

    /// URL of a remote collection (used when no collection file is set)
    #[arg(long, global = true, env = "PCLI_COLLECTION_URL")]
    pub collection_url: Option<String>,

    /// API key for the remote collection
    #[arg(long, global = true, env = "PCLI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Variables as a JSON object, e.g. '{"baseUrl":"http://localhost"}'
    #[arg(long, global = true, env = "PCLI_VARIABLES", default_value = "{}")]
    pub variables: String,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the collection, or everything below a resource
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Locate a resource and print where it is
    Find(FindArgs),

    /// Show a request or example
    Show(ShowArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Names leading to the resource to list, e.g. `users "get user"`
    pub path: Vec<String>,
}

/// Arguments for the find command
#[derive(Parser, Debug)]
pub struct FindArgs {
    /// Names leading to the resource
    #[arg(required = true)]
    pub path: Vec<String>,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Names leading to the resource
    #[arg(required = true)]
    pub path: Vec<String>,

    /// Detail fields to hide, e.g. `--ignore=url,body` (replaces the default
    /// `url,headers`; a bare `--ignore` hides nothing)
    #[arg(long, value_delimiter = ',', num_args = 0..=1, require_equals = true)]
    pub ignore: Option<Vec<String>>,

    /// Fill `{{variables}}` and `:params` in the output
    #[arg(long)]
    pub resolve: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
