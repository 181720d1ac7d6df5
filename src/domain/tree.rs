//! Resource tree model
//!
//! A collection is held as an arena of nodes addressed by [`NodeId`] handles.
//! The arena only ever appends nodes below existing ones, so the tree cannot
//! contain cycles and handles stay valid for the lifetime of the tree.

use crate::domain::request::{KeyValue, RequestData};
use crate::error::TreeError;
use serde::Serialize;
use std::fmt;

/// Opaque handle to a node of a [`ResourceTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Collection,
    Folder,
    Request,
    Example,
}

impl NodeKind {
    /// Single-letter symbol used in listings
    pub const fn symbol(&self) -> char {
        match self {
            NodeKind::Collection => 'C',
            NodeKind::Folder => 'F',
            NodeKind::Request => 'R',
            NodeKind::Example => 'E',
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Collection => write!(f, "collection"),
            NodeKind::Folder => write!(f, "folder"),
            NodeKind::Request => write!(f, "request"),
            NodeKind::Example => write!(f, "example"),
        }
    }
}

/// A node of the resource tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Collection {
        name: String,
        items: Vec<NodeId>,
        variables: Vec<KeyValue>,
    },
    Folder {
        name: String,
        items: Vec<NodeId>,
    },
    Request {
        name: String,
        request: RequestData,
        examples: Vec<NodeId>,
    },
    Example {
        name: String,
        /// Owning request (non-owning back-reference)
        owner: NodeId,
        /// Request captured with the saved response, if any
        snapshot: Option<RequestData>,
    },
}

impl Node {
    /// Display name
    pub fn name(&self) -> &str {
        match self {
            Node::Collection { name, .. }
            | Node::Folder { name, .. }
            | Node::Request { name, .. }
            | Node::Example { name, .. } => name,
        }
    }

    /// Kind of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Collection { .. } => NodeKind::Collection,
            Node::Folder { .. } => NodeKind::Folder,
            Node::Request { .. } => NodeKind::Request,
            Node::Example { .. } => NodeKind::Example,
        }
    }

    /// Addressable children: items of containers, examples of requests.
    ///
    /// Returns `None` for examples, which cannot have children.
    pub fn children(&self) -> Option<&[NodeId]> {
        match self {
            Node::Collection { items, .. } | Node::Folder { items, .. } => Some(items),
            Node::Request { examples, .. } => Some(examples),
            Node::Example { .. } => None,
        }
    }
}

/// Arena-backed tree of collection resources
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTree {
    nodes: Vec<Node>,
}

impl ResourceTree {
    const ROOT: NodeId = NodeId(0);

    /// Create a tree holding an empty collection
    pub fn new(name: impl Into<String>) -> Result<Self, TreeError> {
        let name = validated_name(name.into())?;
        Ok(Self {
            nodes: vec![Node::Collection {
                name,
                items: Vec::new(),
                variables: Vec::new(),
            }],
        })
    }

    /// Handle of the root collection
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Look up a node
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Look up a node, failing on a foreign handle
    pub fn node(&self, id: NodeId) -> Result<&Node, TreeError> {
        self.get(id).ok_or(TreeError::DanglingNode(id))
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root collection
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Name of the root collection
    pub fn name(&self) -> &str {
        self.nodes[Self::ROOT.0].name()
    }

    /// Collection-level variables
    pub fn variables(&self) -> &[KeyValue] {
        match &self.nodes[Self::ROOT.0] {
            Node::Collection { variables, .. } => variables,
            _ => &[],
        }
    }

    /// Replace the collection-level variables
    pub fn set_variables(&mut self, vars: Vec<KeyValue>) {
        if let Node::Collection { variables, .. } = &mut self.nodes[Self::ROOT.0] {
            *variables = vars;
        }
    }

    /// Add a folder under the collection or a folder
    pub fn add_folder(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        let name = validated_name(name.into())?;
        self.attach_item(
            parent,
            Node::Folder {
                name,
                items: Vec::new(),
            },
        )
    }

    /// Add a request under the collection or a folder
    pub fn add_request(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        request: RequestData,
    ) -> Result<NodeId, TreeError> {
        let name = validated_name(name.into())?;
        self.attach_item(
            parent,
            Node::Request {
                name,
                request,
                examples: Vec::new(),
            },
        )
    }

    /// Add a saved example under a request
    pub fn add_example(
        &mut self,
        request: NodeId,
        name: impl Into<String>,
        snapshot: Option<RequestData>,
    ) -> Result<NodeId, TreeError> {
        let name = validated_name(name.into())?;
        let id = NodeId(self.nodes.len());

        match self.nodes.get_mut(request.0) {
            Some(Node::Request { examples, .. }) => examples.push(id),
            Some(other) => {
                return Err(TreeError::InvalidParent {
                    parent: other.kind(),
                    child: NodeKind::Example,
                })
            }
            None => return Err(TreeError::DanglingNode(request)),
        }

        self.nodes.push(Node::Example {
            name,
            owner: request,
            snapshot,
        });
        Ok(id)
    }

    fn attach_item(&mut self, parent: NodeId, node: Node) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len());
        let child = node.kind();

        match self.nodes.get_mut(parent.0) {
            Some(Node::Collection { items, .. }) | Some(Node::Folder { items, .. }) => {
                items.push(id)
            }
            Some(other) => {
                return Err(TreeError::InvalidParent {
                    parent: other.kind(),
                    child,
                })
            }
            None => return Err(TreeError::DanglingNode(parent)),
        }

        self.nodes.push(node);
        Ok(id)
    }
}

fn validated_name(name: String) -> Result<String, TreeError> {
    if name.trim().is_empty() {
        return Err(TreeError::EmptyName);
    }
    Ok(name)
}
