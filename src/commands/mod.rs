//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod find;
pub mod list;
pub mod show;

pub use find::run_find;
pub use list::run_list;
pub use show::run_show;

use crate::cli::args::{generate_completions, Cli, Commands};
use crate::config::Config;
use crate::document::{load_collection, select_source};
use crate::domain::ResourceTree;
use crate::error::Result;
use crate::services::VariableScope;

/// Run the parsed command against a loaded collection.
///
/// `--variables` is only parsed for `show`, the one command that uses it.
pub fn dispatch(cli: &Cli, tree: &ResourceTree, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::List(args) => run_list(args, tree, config, cli.format),

        Commands::Find(args) => run_find(args, tree, config, cli.format),

        Commands::Show(args) => {
            let cli_vars = VariableScope::parse_cli(&cli.variables)?;
            run_show(args, tree, config, &cli_vars, cli.format)
        }

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

/// Load the configured collection, warning when none is found
pub fn load_tree(config: &Config) -> Result<ResourceTree> {
    let source = select_source(&config.source);
    if let Some(source) = &source {
        log::debug!("Loading collection from {}", source.describe());
    }

    let loaded = load_collection(source.as_deref())?;
    if loaded.is_empty() {
        log::warn!("no collection is found, creating new");
    }

    Ok(loaded.tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ConfigError};
    use crate::fixtures;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["pcli", "--no-color", "--format", "compact"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_bad_variables_only_affect_show() {
        let tree = fixtures::sample_api();
        let config = Config::default();

        assert!(dispatch(&cli(&["--variables", "[1]", "list"]), &tree, &config).is_ok());
        assert!(dispatch(&cli(&["--variables", "[1]", "find", "users"]), &tree, &config).is_ok());

        let err = dispatch(&cli(&["--variables", "[1]", "show", "health"]), &tree, &config)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_show_with_variables() {
        let tree = fixtures::sample_api();
        let args = cli(&["--variables", r#"{"baseUrl":"x"}"#, "show", "health"]);
        assert!(dispatch(&args, &tree, &Config::default()).is_ok());
    }
}
