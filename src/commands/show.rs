//! Show command implementation
//!
//! Prints a request or example with its details, or the contents of a
//! collection or folder.

use crate::cli::args::{OutputFormat, ShowArgs};
use crate::cli::output::{print_output, ShowOutput};
use crate::config::Config;
use crate::domain::{NodeKind, ResourceTree};
use crate::error::Result;
use crate::services::{extract_details, resolve, Composer, Lister, VariableScope};
use serde_json::{Map, Value};

/// Execute the show command
pub fn run_show(
    args: &ShowArgs,
    tree: &ResourceTree,
    config: &Config,
    cli_vars: &Map<String, Value>,
    format: OutputFormat,
) -> Result<()> {
    let shown = build_show(args, tree, config, cli_vars)?;
    print_output(&shown, format)?;
    Ok(())
}

/// Resolve the path and compose the resource for display
pub fn build_show(
    args: &ShowArgs,
    tree: &ResourceTree,
    config: &Config,
    cli_vars: &Map<String, Value>,
) -> Result<ShowOutput> {
    let id = resolve(tree, tree.root(), &args.path)?;
    let node = tree.node(id)?;
    let composer = Composer::new(config.display.to_options());

    match node.kind() {
        NodeKind::Collection | NodeKind::Folder => {
            let items = Lister::new(config.listing.max_depth).list(tree, id)?;
            Ok(ShowOutput {
                kind: node.kind(),
                name: node.name().to_string(),
                context: None,
                formatted: composer.compose_container(node.name(), &items),
                items: Some(items),
                color: config.display.color,
            })
        }
        NodeKind::Request | NodeKind::Example => {
            let mut details = extract_details(tree, id)?;
            let scope = VariableScope::merge(tree.variables(), &config.variables, cli_vars);
            if args.resolve {
                log::debug!("Resolving {} variables", scope.values().len());
                details = scope.apply(&details);
            }

            Ok(ShowOutput {
                kind: node.kind(),
                name: node.name().to_string(),
                formatted: composer.compose(node.name(), &details),
                context: Some(scope.context(details)),
                items: None,
                color: config.display.color,
            })
        }
    }
}
