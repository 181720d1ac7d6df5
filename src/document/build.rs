//! Conversion from a collection document into a resource tree

use crate::document::schema::{
    BodyDocument, CollectionDocument, HeaderDocument, ItemDocument, KeyValueDocument,
    RequestDocument, UrlDocument,
};
use crate::domain::{KeyValue, NodeId, RequestBody, RequestData, ResourceTree, UrlTemplate};
use crate::error::TreeError;
use serde_json::Value;

/// Name given to collections without one
pub const DEFAULT_COLLECTION_NAME: &str = "New Collection";
const DEFAULT_FOLDER_NAME: &str = "Untitled Folder";
const DEFAULT_REQUEST_NAME: &str = "Untitled Request";
const DEFAULT_EXAMPLE_NAME: &str = "Untitled Example";

/// Build a tree from a parsed document
pub fn build_tree(document: &CollectionDocument) -> Result<ResourceTree, TreeError> {
    let mut tree = ResourceTree::new(name_or(
        document.info.name.as_deref(),
        DEFAULT_COLLECTION_NAME,
    ))?;
    tree.set_variables(document.variable.iter().map(key_value).collect());

    let root = tree.root();
    for item in &document.item {
        add_item(&mut tree, root, item)?;
    }

    Ok(tree)
}

fn add_item(tree: &mut ResourceTree, parent: NodeId, item: &ItemDocument) -> Result<(), TreeError> {
    if let Some(children) = &item.item {
        let folder = tree.add_folder(parent, name_or(item.name.as_deref(), DEFAULT_FOLDER_NAME))?;
        for child in children {
            add_item(tree, folder, child)?;
        }
        return Ok(());
    }

    let request = item.request.as_ref().map(request_data).unwrap_or_default();
    let id = tree.add_request(
        parent,
        name_or(item.name.as_deref(), DEFAULT_REQUEST_NAME),
        request,
    )?;

    for response in &item.response {
        tree.add_example(
            id,
            name_or(response.name.as_deref(), DEFAULT_EXAMPLE_NAME),
            response.original_request.as_ref().map(request_data),
        )?;
    }

    Ok(())
}

fn name_or(name: Option<&str>, default: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}

/// Convert a request document into request data
pub fn request_data(document: &RequestDocument) -> RequestData {
    let object = match document {
        RequestDocument::Url(raw) => return RequestData::new(RequestData::DEFAULT_METHOD, raw),
        RequestDocument::Object(object) => object,
    };

    let url = match &object.url {
        None => UrlTemplate::default(),
        Some(UrlDocument::Raw(raw)) => UrlTemplate::parse(raw),
        Some(UrlDocument::Object(url)) => {
            let mut template = url.raw.as_deref().map(UrlTemplate::parse).unwrap_or_default();
            if let Some(path) = &url.path {
                template.path = path.segments();
            }
            if !url.query.is_empty() {
                template.query = url.query.iter().map(key_value).collect();
            }
            template.variables = url.variable.iter().map(key_value).collect();
            template
        }
    };

    RequestData {
        method: object
            .method
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| RequestData::DEFAULT_METHOD.to_string()),
        url,
        headers: headers(&object.header),
        body: object.body.as_ref().and_then(body),
    }
}

fn headers(document: &HeaderDocument) -> Vec<KeyValue> {
    match document {
        HeaderDocument::List(entries) => entries.iter().map(key_value).collect(),
        HeaderDocument::Raw(raw) => raw
            .lines()
            .filter_map(|line| line.split_once(':'))
            .map(|(key, value)| KeyValue::new(key.trim(), value.trim()))
            .filter(|kv| !kv.key.is_empty())
            .collect(),
    }
}

fn body(document: &BodyDocument) -> Option<RequestBody> {
    match document.mode.as_deref() {
        Some("raw") => Some(RequestBody::Raw(document.raw.clone().unwrap_or_default())),
        Some("urlencoded") => Some(RequestBody::UrlEncoded(
            document.urlencoded.iter().map(key_value).collect(),
        )),
        Some("formdata") => Some(RequestBody::FormData(
            document.formdata.iter().map(key_value).collect(),
        )),
        Some("graphql") => document.graphql.clone().map(RequestBody::GraphQl),
        Some(_) => None,
        None => document.raw.clone().map(RequestBody::Raw),
    }
}

fn key_value(document: &KeyValueDocument) -> KeyValue {
    KeyValue {
        key: document
            .key
            .clone()
            .or_else(|| document.id.clone())
            .unwrap_or_default(),
        value: document.value.clone().unwrap_or(Value::Null),
        disabled: document.disabled,
    }
}
