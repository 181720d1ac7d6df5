//! Domain models for pcli
//!
//! The resource tree, request templates and the extracted/formatted views
//! produced from them. Tree construction validates names and parent kinds.

pub mod details;
pub mod request;
pub mod tree;

pub use details::{FormattedOutput, RequestContext, ResourceDetails};
pub use request::{KeyValue, RequestBody, RequestData, UrlTemplate};
pub use tree::{Node, NodeId, NodeKind, ResourceTree};
