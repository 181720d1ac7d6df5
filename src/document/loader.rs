//! Collection loading
//!
//! Fetches a collection document from a local file or a remote URL and turns
//! it into a [`ResourceTree`]. Sources sit behind the [`CollectionSource`]
//! trait so commands can be tested without touching the network.

use crate::config::SourceConfig;
use crate::document::build::{build_tree, DEFAULT_COLLECTION_NAME};
use crate::document::schema::CollectionDocument;
use crate::domain::ResourceTree;
use crate::error::LoadError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Header carrying the API key on remote requests
pub const API_KEY_HEADER: &str = "X-API-Key";

/// A place a collection document can come from
pub trait CollectionSource {
    /// Human-readable origin, used in logs and errors
    fn describe(&self) -> String;

    /// Fetch the raw document. `Ok(None)` means the source is unavailable.
    fn fetch(&self) -> Result<Option<Value>, LoadError>;
}

/// Collection stored in a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CollectionSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Option<Value>, LoadError> {
        if !self.path.exists() {
            log::debug!("Collection file {} does not exist", self.path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.describe(),
            source,
        })?;

        let value = serde_json::from_str(&content).map_err(|source| LoadError::Parse {
            origin: self.describe(),
            source,
        })?;

        log::info!("Loaded collection from {}", self.path.display());
        Ok(Some(value))
    }
}

/// Collection served over HTTP, authenticated with an API key
#[derive(Debug, Clone)]
pub struct RemoteSource {
    url: String,
    api_key: String,
    timeout: Duration,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout,
        }
    }
}

impl CollectionSource for RemoteSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<Option<Value>, LoadError> {
        let http_error = |source| LoadError::Http {
            url: self.url.clone(),
            source,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(http_error)?;

        let response = client
            .get(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(http_error)?;

        let status = response.status();
        log::info!("{} GET {}", status, self.url);

        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let value = response.json::<Value>().map_err(http_error)?;
        Ok(Some(value))
    }
}

/// Where a loaded tree came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedFrom {
    Source(String),
    /// Nothing usable was found; the tree is an empty collection
    Empty,
}

/// A loaded collection
#[derive(Debug, Clone)]
pub struct Loaded {
    pub tree: ResourceTree,
    pub origin: LoadedFrom,
}

impl Loaded {
    /// True when no collection was found
    pub fn is_empty(&self) -> bool {
        self.origin == LoadedFrom::Empty
    }
}

/// Pick the source described by the configuration.
///
/// A configured file always wins; the remote source is only used when no file
/// is configured and both URL and API key are set.
pub fn select_source(config: &SourceConfig) -> Option<Box<dyn CollectionSource>> {
    if let Some(path) = &config.collection {
        return Some(Box::new(FileSource::new(path)));
    }

    match (&config.url, &config.api_key) {
        (Some(url), Some(api_key)) => Some(Box::new(RemoteSource::new(
            url.clone(),
            api_key.clone(),
            Duration::from_secs(config.timeout_seconds),
        ))),
        _ => None,
    }
}

/// Load a collection from `source`, falling back to an empty collection
pub fn load_collection(source: Option<&dyn CollectionSource>) -> Result<Loaded, LoadError> {
    let fetched = match source {
        Some(source) => source.fetch()?.map(|value| (source.describe(), value)),
        None => None,
    };

    match fetched {
        Some((origin, value)) if !is_empty_document(&value) => {
            let tree = parse_tree(unwrap_collection(value), &origin)?;
            Ok(Loaded {
                tree,
                origin: LoadedFrom::Source(origin),
            })
        }
        _ => Ok(Loaded {
            tree: ResourceTree::new(DEFAULT_COLLECTION_NAME)?,
            origin: LoadedFrom::Empty,
        }),
    }
}

/// Some exports wrap the collection in a `collection` field. A missing or
/// null field leaves the document as it is.
pub fn unwrap_collection(value: Value) -> Value {
    match value {
        Value::Object(mut map) => match map.remove("collection") {
            Some(Value::Null) | None => Value::Object(map),
            Some(inner) => inner,
        },
        other => other,
    }
}

/// Parse an unwrapped document into a tree
pub fn parse_tree(value: Value, origin: &str) -> Result<ResourceTree, LoadError> {
    let document: CollectionDocument =
        serde_json::from_value(value).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    Ok(build_tree(&document)?)
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer a single HTTP request with `status` and `body`, returning the
    /// raw request text from the join handle.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/collection", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    struct StaticSource(Option<Value>);

    impl CollectionSource for StaticSource {
        fn describe(&self) -> String {
            "static".to_string()
        }

        fn fetch(&self) -> Result<Option<Value>, LoadError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_unwrap_collection_field() {
        let wrapped = json!({"collection": {"info": {"name": "A"}}});
        assert_eq!(unwrap_collection(wrapped), json!({"info": {"name": "A"}}));

        let plain = json!({"info": {"name": "B"}});
        assert_eq!(unwrap_collection(plain.clone()), plain);
    }

    #[test]
    fn test_no_source_gives_empty_collection() {
        let loaded = load_collection(None).unwrap();
        assert!(loaded.is_empty());
        assert_eq!(loaded.tree.name(), DEFAULT_COLLECTION_NAME);
        assert_eq!(loaded.tree.len(), 1);
    }

    #[test]
    fn test_unavailable_or_blank_source_gives_empty_collection() {
        assert!(load_collection(Some(&StaticSource(None))).unwrap().is_empty());
        assert!(load_collection(Some(&StaticSource(Some(json!({})))))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_wrapped_document_is_loaded() {
        let source = StaticSource(Some(json!({
            "collection": {"info": {"name": "Remote"}, "item": [{"name": "Ping", "request": "/ping"}]}
        })));
        let loaded = load_collection(Some(&source)).unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Source("static".to_string()));
        assert_eq!(loaded.tree.name(), "Remote");
        assert_eq!(loaded.tree.len(), 2);
    }

    #[test]
    fn test_invalid_document_is_parse_error() {
        let source = StaticSource(Some(json!({"item": "not a list"})));
        let err = load_collection(Some(&source)).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_select_source_prefers_file() {
        let config = SourceConfig {
            collection: Some("api.json".to_string()),
            url: Some("https://example.com/c".to_string()),
            api_key: Some("key".to_string()),
            ..SourceConfig::default()
        };
        assert_eq!(select_source(&config).unwrap().describe(), "api.json");
    }

    #[test]
    fn test_select_source_remote_needs_key() {
        let mut config = SourceConfig {
            url: Some("https://example.com/c".to_string()),
            ..SourceConfig::default()
        };
        assert!(select_source(&config).is_none());

        config.api_key = Some("key".to_string());
        assert_eq!(
            select_source(&config).unwrap().describe(),
            "https://example.com/c"
        );
    }

    #[test]
    fn test_unwrap_null_collection_keeps_document() {
        let doc = json!({"collection": null, "info": {"name": "C"}});
        assert_eq!(unwrap_collection(doc), json!({"info": {"name": "C"}}));
    }

    #[test]
    fn test_remote_source_sends_api_key() {
        let (url, server) = serve_once("200 OK", r#"{"info":{"name":"Remote"}}"#);
        let source = RemoteSource::new(url, "secret-key", Duration::from_secs(5));

        let value = source.fetch().unwrap().unwrap();
        assert_eq!(value, json!({"info": {"name": "Remote"}}));

        let request = server.join().unwrap().to_lowercase();
        assert!(request.starts_with("get /collection "));
        assert!(request.contains("x-api-key: secret-key"));
    }

    #[test]
    fn test_remote_source_loads_wrapped_collection() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"collection":{"info":{"name":"Remote"},"item":[{"name":"Ping","request":"/ping"}]}}"#,
        );
        let source = RemoteSource::new(url.clone(), "key", Duration::from_secs(5));

        let loaded = load_collection(Some(&source)).unwrap();
        assert_eq!(loaded.origin, LoadedFrom::Source(url));
        assert_eq!(loaded.tree.name(), "Remote");
        assert_eq!(loaded.tree.len(), 2);
        server.join().unwrap();
    }

    #[test]
    fn test_remote_source_rejects_error_status() {
        let (url, server) = serve_once("401 Unauthorized", r#"{"error":"unauthorized"}"#);
        let source = RemoteSource::new(url, "wrong", Duration::from_secs(5));

        let err = source.fetch().unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 401, .. }));
        server.join().unwrap();
    }
}
