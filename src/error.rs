//! Unified error types for pcli
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use crate::domain::{NodeId, NodeKind};
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Path resolution failed
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Tree construction or traversal failed
    #[error("Malformed collection: {0}")]
    Tree(#[from] TreeError),

    /// Detail extraction failed
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// Collection loading failed
    #[error("Failed to load collection: {0}")]
    Load(#[from] LoadError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from following a path of names through the tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No path segments were given
    #[error("No resource path given")]
    EmptyPath,

    /// A segment has no matching child in the searched scope
    #[error("\"{segment}\" not found in \"{scope}\".")]
    NotFound { segment: String, scope: String },

    /// A segment follows a node that cannot have children
    #[error("\"{segment}\" is unreachable: example \"{name}\" has no children.")]
    DeadEnd { segment: String, name: String },

    /// The tree itself is inconsistent
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors from building or walking the resource tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A node was given a blank name
    #[error("resource names must not be empty")]
    EmptyName,

    /// A node was attached under a parent of the wrong kind
    #[error("a {child} cannot be placed inside a {parent}")]
    InvalidParent { parent: NodeKind, child: NodeKind },

    /// A handle does not belong to this tree
    #[error("node {0} does not belong to this collection")]
    DanglingNode(NodeId),

    /// Nesting exceeds the traversal ceiling
    #[error("nesting deeper than {limit} levels below \"{name}\"")]
    TooDeep { limit: usize, name: String },
}

/// Errors from extracting request details
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Raw body is not valid JSON
    #[error("Malformed body on \"{name}\": {source}")]
    MalformedBody {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Example without own or inherited request data
    #[error("not found request data on \"{0}\"")]
    NoRequestData(String),

    /// Containers carry no request
    #[error("\"{name}\" is a {kind} and has no request details")]
    NotExtractable { name: String, kind: NodeKind },

    /// The tree itself is inconsistent
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors from loading a collection document
#[derive(Error, Debug)]
pub enum LoadError {
    /// Collection file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid JSON or not a collection
    #[error("invalid collection document from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure talking to the remote source
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote source answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Document content violates tree rules
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ResolveError::NotFound {
            segment: "missing".to_string(),
            scope: "f1".to_string(),
        };
        assert_eq!(err.to_string(), "\"missing\" not found in \"f1\".");
    }

    #[test]
    fn test_dead_end_display() {
        let err = ResolveError::DeadEnd {
            segment: "extra".to_string(),
            name: "e1".to_string(),
        };
        assert!(err.to_string().contains("\"extra\""));
        assert!(err.to_string().contains("\"e1\""));
    }

    #[test]
    fn test_invalid_parent_display() {
        let err = TreeError::InvalidParent {
            parent: NodeKind::Request,
            child: NodeKind::Folder,
        };
        assert_eq!(err.to_string(), "a folder cannot be placed inside a request");
    }

    #[test]
    fn test_error_conversion() {
        let resolve_err = ResolveError::EmptyPath;
        let app_err: AppError = resolve_err.into();
        assert!(matches!(app_err, AppError::Resolve(_)));

        let tree_err: ResolveError = TreeError::EmptyName.into();
        assert!(matches!(tree_err, ResolveError::Tree(TreeError::EmptyName)));
    }
}
