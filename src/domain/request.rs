//! Request data domain types
//!
//! The request template carried by a Request node or captured on an Example.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key/value entry (header, query parameter or path variable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: serde_json::Value,
    #[serde(default)]
    pub disabled: bool,
}

impl KeyValue {
    /// Create an enabled entry with a string value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: serde_json::Value::String(value.into()),
            disabled: false,
        }
    }

    /// Create an enabled entry without a value (`?flag`)
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: serde_json::Value::Null,
            disabled: false,
        }
    }
}

/// URL template with placeholders kept verbatim
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UrlTemplate {
    /// Raw URL as written in the document
    pub raw: String,
    /// Path segments, e.g. `["users", ":id"]`
    pub path: Vec<String>,
    /// Query parameters in stored order
    pub query: Vec<KeyValue>,
    /// Path variables (`:name` segments)
    pub variables: Vec<KeyValue>,
}

impl UrlTemplate {
    /// Parse a raw URL the way the collection format does: protocol and host
    /// are dropped, the remainder is split into path segments and query.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let before_hash = trimmed.split('#').next().unwrap_or(trimmed);
        let (location, query_str) = match before_hash.split_once('?') {
            Some((location, query)) => (location, Some(query)),
            None => (before_hash, None),
        };

        let without_protocol = location
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(location);

        let path = match without_protocol.split_once('/') {
            Some((_host, path)) => path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        };

        let query = query_str
            .map(|q| {
                q.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((key, value)) => KeyValue::new(key, value),
                        None => KeyValue::bare(pair),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            raw: raw.to_string(),
            path,
            query,
            variables: Vec::new(),
        }
    }

    /// Path with unresolved placeholders preserved
    pub fn path_string(&self) -> String {
        format!("/{}", self.path.join("/"))
    }
}

/// Request body by mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "content", rename_all = "lowercase")]
pub enum RequestBody {
    Raw(String),
    UrlEncoded(Vec<KeyValue>),
    FormData(Vec<KeyValue>),
    GraphQl(serde_json::Value),
}

/// The request template of a Request node or an Example snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    pub method: String,
    pub url: UrlTemplate,
    pub headers: Vec<KeyValue>,
    pub body: Option<RequestBody>,
}

impl RequestData {
    /// Default method when the document omits one
    pub const DEFAULT_METHOD: &'static str = "GET";

    /// Create request data for a method and raw URL
    pub fn new(method: impl Into<String>, raw_url: &str) -> Self {
        Self {
            method: method.into(),
            url: UrlTemplate::parse(raw_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(KeyValue::new(key, value));
        self
    }

    /// Set a raw body
    pub fn with_raw_body(mut self, raw: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Raw(raw.into()));
        self
    }

    /// Add a path variable
    pub fn with_path_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.url.variables.push(KeyValue::new(key, value));
        self
    }
}

impl Default for RequestData {
    fn default() -> Self {
        Self::new(Self::DEFAULT_METHOD, "")
    }
}

impl fmt::Display for RequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url.path_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_protocol_and_host() {
        let url = UrlTemplate::parse("https://api.example.com/v1/users/:id?page=2&flag");
        assert_eq!(url.path, vec!["v1", "users", ":id"]);
        assert_eq!(url.query.len(), 2);
        assert_eq!(url.query[0].key, "page");
        assert_eq!(url.query[0].value, serde_json::json!("2"));
        assert!(url.query[1].value.is_null());
    }

    #[test]
    fn test_parse_keeps_variable_host_and_placeholders() {
        let url = UrlTemplate::parse("{{baseUrl}}/orders/{{orderId}}");
        assert_eq!(url.path_string(), "/orders/{{orderId}}");
    }

    #[test]
    fn test_parse_empty_url() {
        let url = UrlTemplate::parse("");
        assert!(url.path.is_empty());
        assert_eq!(url.path_string(), "/");
    }

    #[test]
    fn test_request_display() {
        let req = RequestData::new("POST", "{{host}}/login");
        assert_eq!(req.to_string(), "POST /login");
    }
}
