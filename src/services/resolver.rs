//! Path resolution
//!
//! Follows a sequence of case-insensitive names from a starting node down
//! through folders, requests and examples.

use crate::domain::{Node, NodeId, ResourceTree};
use crate::error::ResolveError;

/// Resolve `path` starting at `root`.
///
/// Each segment is matched against the names of the current scope's children,
/// first match in stored order wins. Folders and requests open a new scope
/// (their items and examples respectively); an example ends the walk, so any
/// segment after it is a [`ResolveError::DeadEnd`].
pub fn resolve<S: AsRef<str>>(
    tree: &ResourceTree,
    root: NodeId,
    path: &[S],
) -> Result<NodeId, ResolveError> {
    let Some((last, leading)) = path.split_last() else {
        return Err(ResolveError::EmptyPath);
    };

    let mut scope = root;
    for segment in leading {
        scope = step(tree, scope, segment.as_ref())?;
    }
    step(tree, scope, last.as_ref())
}

/// Siblings in `scope` sharing the (case-insensitive) name of `id`, excluding
/// `id` itself. Resolution always picks the first of them.
pub fn shadowed_siblings(tree: &ResourceTree, scope: NodeId, id: NodeId) -> Vec<NodeId> {
    let (Some(scope), Some(target)) = (tree.get(scope), tree.get(id)) else {
        return Vec::new();
    };
    let needle = target.name().to_lowercase();

    scope
        .children()
        .unwrap_or(&[])
        .iter()
        .copied()
        .filter(|child| *child != id)
        .filter(|child| {
            tree.get(*child)
                .is_some_and(|node| node.name().to_lowercase() == needle)
        })
        .collect()
}

/// Resolve `path` and also return the handle of every node walked through,
/// starting with `root`. Used to print breadcrumbs.
pub fn resolve_trail<S: AsRef<str>>(
    tree: &ResourceTree,
    root: NodeId,
    path: &[S],
) -> Result<Vec<NodeId>, ResolveError> {
    if path.is_empty() {
        return Err(ResolveError::EmptyPath);
    }

    let mut trail = Vec::with_capacity(path.len() + 1);
    trail.push(root);
    let mut scope = root;
    for segment in path {
        scope = step(tree, scope, segment.as_ref())?;
        trail.push(scope);
    }
    Ok(trail)
}

/// Descend one level: find `segment` among the children of `scope`.
fn step(tree: &ResourceTree, scope: NodeId, segment: &str) -> Result<NodeId, ResolveError> {
    let scope_node = tree.node(scope)?;

    let Some(children) = scope_node.children() else {
        return Err(ResolveError::DeadEnd {
            segment: segment.to_string(),
            name: scope_node.name().to_string(),
        });
    };

    let needle = segment.to_lowercase();
    for &child in children {
        let node: &Node = tree.node(child)?;
        if node.name().to_lowercase() == needle {
            return Ok(child);
        }
    }

    Err(ResolveError::NotFound {
        segment: segment.to_string(),
        scope: scope_node.name().to_string(),
    })
}
