//! Detail extraction
//!
//! Turns the request template of a Request or Example into a normalized
//! [`ResourceDetails`] view.

use crate::domain::{KeyValue, Node, NodeId, RequestBody, RequestData, ResourceDetails, ResourceTree};
use crate::error::ExtractError;
use serde_json::{Map, Value};

/// Extract details for a Request or Example node.
///
/// Examples use their own captured request when present and fall back to the
/// request that owns them.
pub fn extract_details(tree: &ResourceTree, id: NodeId) -> Result<ResourceDetails, ExtractError> {
    let node = tree.node(id)?;

    match node {
        Node::Request { name, request, .. } => details_from_request(name, request),
        Node::Example {
            name,
            owner,
            snapshot,
        } => {
            let inherited = match tree.get(*owner) {
                Some(Node::Request { request, .. }) => Some(request),
                _ => None,
            };
            details_from_example(name, snapshot.as_ref(), inherited)
        }
        Node::Collection { name, .. } | Node::Folder { name, .. } => {
            Err(ExtractError::NotExtractable {
                name: name.clone(),
                kind: node.kind(),
            })
        }
    }
}

/// Extract details for an example given its snapshot and the inherited
/// request data, preferring the snapshot.
pub fn details_from_example(
    name: &str,
    snapshot: Option<&RequestData>,
    inherited: Option<&RequestData>,
) -> Result<ResourceDetails, ExtractError> {
    let request = snapshot
        .or(inherited)
        .ok_or_else(|| ExtractError::NoRequestData(name.to_string()))?;
    details_from_request(name, request)
}

/// Extract details from request data; `name` is only used in errors.
pub fn details_from_request(
    name: &str,
    request: &RequestData,
) -> Result<ResourceDetails, ExtractError> {
    Ok(ResourceDetails {
        method: request.method.to_lowercase(),
        path: request.url.path_string(),
        params: to_object(&request.url.variables),
        query: to_object(&request.url.query),
        headers: to_object(&request.headers),
        body: parse_body(name, request.body.as_ref())?,
    })
}

/// Collapse key/value entries into an object; later duplicates win.
pub fn to_object(entries: &[KeyValue]) -> Map<String, Value> {
    let mut object = Map::new();
    for entry in entries {
        object.insert(entry.key.clone(), entry.value.clone());
    }
    object
}

fn parse_body(name: &str, body: Option<&RequestBody>) -> Result<Value, ExtractError> {
    match body {
        None => Ok(Value::Object(Map::new())),
        Some(RequestBody::Raw(raw)) if raw.is_empty() => Ok(Value::Object(Map::new())),
        Some(RequestBody::Raw(raw)) => {
            serde_json::from_str(raw).map_err(|source| ExtractError::MalformedBody {
                name: name.to_string(),
                source,
            })
        }
        Some(RequestBody::UrlEncoded(fields)) | Some(RequestBody::FormData(fields)) => {
            Ok(Value::Object(to_object(fields)))
        }
        Some(RequestBody::GraphQl(graphql)) => Ok(graphql.clone()),
    }
}
