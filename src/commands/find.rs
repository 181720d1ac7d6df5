//! Find command implementation
//!
//! Resolves a path and reports the resource's kind and location.

use crate::cli::args::{FindArgs, OutputFormat};
use crate::cli::output::{print_output, FindOutput};
use crate::config::Config;
use crate::domain::ResourceTree;
use crate::error::Result;
use crate::services::{resolve_trail, shadowed_siblings};

/// Execute the find command
pub fn run_find(
    args: &FindArgs,
    tree: &ResourceTree,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let found = build_find(args, tree, config)?;
    print_output(&found, format)?;
    Ok(())
}

/// Resolve the path and describe the result
pub fn build_find(args: &FindArgs, tree: &ResourceTree, config: &Config) -> Result<FindOutput> {
    let trail = resolve_trail(tree, tree.root(), &args.path)?;

    let mut names = Vec::with_capacity(trail.len());
    for id in &trail {
        names.push(tree.node(*id)?.name().to_string());
    }

    // A non-empty path always yields the root plus at least one node.
    let (id, parent) = match trail.as_slice() {
        [.., parent, id] => (*id, *parent),
        _ => (tree.root(), tree.root()),
    };
    let node = tree.node(id)?;

    let shadowed = shadowed_siblings(tree, parent, id).len();
    if shadowed > 0 {
        log::debug!(
            "\"{}\" shares its name with {} sibling(s); using the first",
            node.name(),
            shadowed
        );
    }

    Ok(FindOutput {
        kind: node.kind(),
        name: node.name().to_string(),
        trail: names,
        shadowed,
        color: config.display.color,
    })
}
