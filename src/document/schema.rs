//! Collection document schema
//!
//! Serde mirror of the Postman v2.x collection format, limited to the parts
//! pcli reads. Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

/// Root of a collection document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionDocument {
    #[serde(default)]
    pub info: InfoDocument,
    #[serde(default)]
    pub item: Vec<ItemDocument>,
    #[serde(default)]
    pub variable: Vec<KeyValueDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InfoDocument {
    pub name: Option<String>,
}

/// A folder (has `item`) or a request (everything else)
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDocument {
    pub name: Option<String>,
    pub item: Option<Vec<ItemDocument>>,
    pub request: Option<RequestDocument>,
    #[serde(default)]
    pub response: Vec<ResponseDocument>,
}

impl ItemDocument {
    /// Folders are recognized by their child list
    pub fn is_folder(&self) -> bool {
        self.item.is_some()
    }
}

/// A saved response
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseDocument {
    pub name: Option<String>,
    #[serde(rename = "originalRequest")]
    pub original_request: Option<RequestDocument>,
}

/// A request is either a bare URL or a full object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RequestDocument {
    Url(String),
    Object(RequestObject),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestObject {
    pub method: Option<String>,
    pub url: Option<UrlDocument>,
    #[serde(default)]
    pub header: HeaderDocument,
    pub body: Option<BodyDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UrlDocument {
    Raw(String),
    Object(UrlObject),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UrlObject {
    pub raw: Option<String>,
    pub path: Option<PathDocument>,
    #[serde(default)]
    pub query: Vec<KeyValueDocument>,
    #[serde(default)]
    pub variable: Vec<KeyValueDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PathDocument {
    Segments(Vec<SegmentDocument>),
    Joined(String),
}

impl PathDocument {
    /// Path segments with empty ones dropped
    pub fn segments(&self) -> Vec<String> {
        match self {
            PathDocument::Segments(segments) => segments
                .iter()
                .filter_map(SegmentDocument::text)
                .filter(|s| !s.is_empty())
                .collect(),
            PathDocument::Joined(joined) => joined
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SegmentDocument {
    Text(String),
    Object { value: Option<String> },
}

impl SegmentDocument {
    fn text(&self) -> Option<String> {
        match self {
            SegmentDocument::Text(text) => Some(text.clone()),
            SegmentDocument::Object { value } => value.clone(),
        }
    }
}

/// Headers as a list of entries or as raw `Key: Value` lines
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HeaderDocument {
    List(Vec<KeyValueDocument>),
    Raw(String),
}

impl Default for HeaderDocument {
    fn default() -> Self {
        HeaderDocument::List(Vec::new())
    }
}

/// Key/value entry; older exports use `id` instead of `key`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyValueDocument {
    pub key: Option<String>,
    pub id: Option<String>,
    pub value: Option<Value>,
    #[serde(default)]
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyDocument {
    pub mode: Option<String>,
    pub raw: Option<String>,
    #[serde(default)]
    pub urlencoded: Vec<KeyValueDocument>,
    #[serde(default)]
    pub formdata: Vec<KeyValueDocument>,
    pub graphql: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_kinds() {
        let folder: ItemDocument = serde_json::from_value(json!({"name": "f", "item": []})).unwrap();
        assert!(folder.is_folder());

        let request: ItemDocument =
            serde_json::from_value(json!({"name": "r", "request": "https://x.io/a"})).unwrap();
        assert!(!request.is_folder());
        assert!(matches!(request.request, Some(RequestDocument::Url(_))));
    }

    #[test]
    fn test_path_forms() {
        let url: UrlObject = serde_json::from_value(json!({
            "path": ["users", {"type": "string", "value": ":id"}, ""]
        }))
        .unwrap();
        assert_eq!(url.path.unwrap().segments(), vec!["users", ":id"]);

        let joined = PathDocument::Joined("/a//b/".to_string());
        assert_eq!(joined.segments(), vec!["a", "b"]);
    }

    #[test]
    fn test_raw_header_string() {
        let req: RequestObject =
            serde_json::from_value(json!({"header": "Accept: text/plain"})).unwrap();
        assert!(matches!(req.header, HeaderDocument::Raw(_)));
    }
}
