//! Tree listing
//!
//! Walks the tree depth-first and produces a nested, order-preserving listing
//! with one entry per node, plus a plain-text renderer for it.

use crate::domain::{NodeId, NodeKind, ResourceTree};
use crate::error::TreeError;
use serde::Serialize;

/// Nesting ceiling used when none is configured
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// One listed node and its listed children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub kind: NodeKind,
    pub name: String,
    pub children: Vec<ListingEntry>,
}

impl ListingEntry {
    /// Number of entries in this subtree, itself included
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(ListingEntry::count).sum::<usize>()
    }
}

/// Entries for the children of the listed root, in stored order
pub type NestedListing = Vec<ListingEntry>;

/// Total number of entries in a listing
pub fn entry_count(listing: &NestedListing) -> usize {
    listing.iter().map(ListingEntry::count).sum()
}

/// Recursive lister with a depth ceiling
#[derive(Debug, Clone, Copy)]
pub struct Lister {
    max_depth: usize,
}

impl Lister {
    /// Create a lister refusing to descend more than `max_depth` levels
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// List every descendant of `root`. The root itself is not part of the
    /// listing.
    pub fn list(&self, tree: &ResourceTree, root: NodeId) -> Result<NestedListing, TreeError> {
        self.list_children(tree, root, 0)
    }

    /// Configured depth ceiling
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn list_children(
        &self,
        tree: &ResourceTree,
        id: NodeId,
        depth: usize,
    ) -> Result<NestedListing, TreeError> {
        let node = tree.node(id)?;
        let children = node.children().unwrap_or(&[]);

        if !children.is_empty() && depth >= self.max_depth {
            return Err(TreeError::TooDeep {
                limit: self.max_depth,
                name: node.name().to_string(),
            });
        }

        children
            .iter()
            .map(|&child| {
                let child_node = tree.node(child)?;
                Ok(ListingEntry {
                    kind: child_node.kind(),
                    name: child_node.name().to_string(),
                    children: self.list_children(tree, child, depth + 1)?,
                })
            })
            .collect()
    }
}

impl Default for Lister {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Render a listing as text, one entry per line, indented one tab per level
pub fn render_listing(listing: &NestedListing) -> String {
    render_listing_with(listing, |kind, name| format!("{} {}", kind.symbol(), name))
}

/// Render a listing, letting `label` format each entry's symbol and name
pub fn render_listing_with<F>(listing: &NestedListing, label: F) -> String
where
    F: Fn(NodeKind, &str) -> String,
{
    let mut output = String::new();
    render_level(listing, 1, &label, &mut output);
    output
}

fn render_level<F>(entries: &[ListingEntry], depth: usize, label: &F, output: &mut String)
where
    F: Fn(NodeKind, &str) -> String,
{
    for entry in entries {
        output.push_str(&"\t".repeat(depth));
        output.push(' ');
        output.push_str(&label(entry.kind, &entry.name));
        output.push('\n');
        render_level(&entry.children, depth + 1, label, output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestData;
    use crate::fixtures;

    #[test]
    fn test_list_single_branch() {
        let (tree, _) = fixtures::single_branch();
        let listing = Lister::default().list(&tree, tree.root()).unwrap();

        assert_eq!(listing.len(), 1);
        let folder = &listing[0];
        assert_eq!((folder.kind, folder.name.as_str()), (NodeKind::Folder, "f1"));
        let request = &folder.children[0];
        assert_eq!((request.kind, request.name.as_str()), (NodeKind::Request, "r1"));
        let example = &request.children[0];
        assert_eq!((example.kind, example.name.as_str()), (NodeKind::Example, "e1"));
        assert!(example.children.is_empty());
    }

    #[test]
    fn test_render_single_branch() {
        let (tree, _) = fixtures::single_branch();
        let listing = Lister::default().list(&tree, tree.root()).unwrap();
        let text = render_listing(&listing);

        assert_eq!(text, "\t F f1\n\t\t R r1\n\t\t\t E e1\n");

        let indents: Vec<usize> = text
            .lines()
            .map(|line| line.chars().take_while(|c| *c == '\t').count())
            .collect();
        assert!(indents.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_listing_is_complete() {
        let tree = fixtures::sample_api();
        let listing = Lister::default().list(&tree, tree.root()).unwrap();
        // every node except the root collection
        assert_eq!(entry_count(&listing), tree.len() - 1);
    }

    #[test]
    fn test_listing_preserves_order() {
        let mut tree = ResourceTree::new("API").unwrap();
        let root = tree.root();
        let folder = tree.add_folder(root, "folder").unwrap();
        for name in ["C", "A", "B"] {
            tree.add_request(folder, name, RequestData::default()).unwrap();
        }

        let listing = Lister::default().list(&tree, root).unwrap();
        let names: Vec<&str> = listing[0]
            .children
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_list_subtree() {
        let tree = fixtures::sample_api();
        let users = crate::services::resolve(&tree, tree.root(), &["users"]).unwrap();
        let listing = Lister::default().list(&tree, users).unwrap();
        assert_eq!(entry_count(&listing), 4);
    }

    #[test]
    fn test_list_example_is_empty() {
        let (tree, ids) = fixtures::single_branch();
        let listing = Lister::default().list(&tree, ids.example).unwrap();
        assert!(listing.is_empty());
    }

    #[test]
    fn test_depth_ceiling() {
        let mut tree = ResourceTree::new("API").unwrap();
        let mut parent = tree.root();
        for level in 0..10 {
            parent = tree.add_folder(parent, format!("level{}", level)).unwrap();
        }

        assert!(Lister::new(10).list(&tree, tree.root()).is_ok());

        let err = Lister::new(4).list(&tree, tree.root()).unwrap_err();
        assert_eq!(
            err,
            TreeError::TooDeep {
                limit: 4,
                name: "level3".to_string(),
            }
        );
    }

    #[test]
    fn test_render_with_custom_label() {
        let (tree, _) = fixtures::single_branch();
        let listing = Lister::default().list(&tree, tree.root()).unwrap();
        let text = render_listing_with(&listing, |kind, name| format!("[{}]{}", kind, name));
        assert!(text.starts_with("\t [folder]f1\n"));
    }
}
