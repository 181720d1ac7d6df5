//! List command implementation
//!
//! Lists the whole collection, or everything below a resolved resource.

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::output::{print_output, ListingOutput};
use crate::config::Config;
use crate::domain::ResourceTree;
use crate::error::Result;
use crate::services::{entry_count, resolve, Lister};

/// Execute the list command
pub fn run_list(
    args: &ListArgs,
    tree: &ResourceTree,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let listing = build_listing(args, tree, config)?;
    print_output(&listing, format)?;
    Ok(())
}

/// Resolve the listed root and list below it
pub fn build_listing(args: &ListArgs, tree: &ResourceTree, config: &Config) -> Result<ListingOutput> {
    let root = if args.path.is_empty() {
        tree.root()
    } else {
        resolve(tree, tree.root(), &args.path)?
    };
    let node = tree.node(root)?;

    let items = Lister::new(config.listing.max_depth).list(tree, root)?;
    log::debug!(
        "Listed {} resources below \"{}\"",
        entry_count(&items),
        node.name()
    );

    Ok(ListingOutput {
        kind: node.kind(),
        name: node.name().to_string(),
        items,
        color: config.display.color,
    })
}
