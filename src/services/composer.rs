//! Display composition
//!
//! Formats extracted details into a [`FormattedOutput`]: a header with the
//! resource name and `method path`, followed by the non-trivial detail fields
//! pretty-printed as JSON.

use crate::domain::{FormattedOutput, ResourceDetails};
use crate::services::lister::{render_listing, NestedListing};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields suppressed when no ignore set is given
pub const DEFAULT_IGNORE: [&str; 2] = ["url", "headers"];

/// Limits applied to values before printing. `0` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Containers nested deeper than this print as `[Object]` / `[Array]`
    pub max_depth: usize,
    /// Items kept per array
    pub max_array_length: usize,
    /// Characters kept per string
    pub max_string_length: usize,
}

impl Limits {
    /// No truncation at all
    pub const UNLIMITED: Limits = Limits {
        max_depth: 0,
        max_array_length: 0,
        max_string_length: 0,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 5,
            max_array_length: 4,
            max_string_length: 16,
        }
    }
}

/// Options for the composer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Field names never printed
    pub ignore: Vec<String>,
    pub limits: Limits,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            limits: Limits::default(),
        }
    }
}

/// Formats resources for display
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: DisplayOptions,
}

impl Composer {
    /// Create a composer
    pub fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    /// Active options
    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Compose a request or example
    pub fn compose(&self, name: &str, details: &ResourceDetails) -> FormattedOutput {
        let fields = self.visible_fields(details);

        let body = if fields.is_empty() {
            None
        } else {
            let truncated = truncate(&Value::Object(fields), &self.options.limits, 0);
            Some(serde_json::to_string_pretty(&truncated).unwrap_or_else(|_| "{}".to_string()))
        };

        FormattedOutput {
            name: name.to_string(),
            summary: Some(details.url_line()),
            body,
        }
    }

    /// Compose a collection or folder from the listing of its contents
    pub fn compose_container(&self, name: &str, listing: &NestedListing) -> FormattedOutput {
        let rendered = render_listing(listing);
        FormattedOutput {
            name: name.to_string(),
            summary: None,
            body: (!rendered.is_empty()).then(|| rendered.trim_end().to_string()),
        }
    }

    /// Detail fields left after dropping ignored and trivial ones, in print
    /// order
    pub fn visible_fields(&self, details: &ResourceDetails) -> Map<String, Value> {
        let mut url = Map::new();
        url.insert("path".to_string(), Value::String(details.path.clone()));
        url.insert("method".to_string(), Value::String(details.method.clone()));

        let candidates = [
            ("params", Value::Object(details.params.clone())),
            ("query", Value::Object(details.query.clone())),
            ("body", details.body.clone()),
            ("url", Value::Object(url)),
            ("headers", Value::Object(details.headers.clone())),
        ];

        candidates
            .into_iter()
            .filter(|(key, _)| !self.options.ignore.iter().any(|ignored| ignored == key))
            .filter(|(_, value)| !is_trivial(value))
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}

/// `{}`, `[]` and `""` carry nothing worth printing
pub fn is_trivial(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Apply `limits` to a value; `depth` is the nesting level of `value`.
pub fn truncate(value: &Value, limits: &Limits, depth: usize) -> Value {
    match value {
        Value::Object(map) => {
            if limits.max_depth > 0 && depth > limits.max_depth {
                return Value::String("[Object]".to_string());
            }
            map.iter()
                .map(|(k, v)| (k.clone(), truncate(v, limits, depth + 1)))
                .collect::<Map<_, _>>()
                .into()
        }
        Value::Array(items) => {
            if limits.max_depth > 0 && depth > limits.max_depth {
                return Value::String("[Array]".to_string());
            }
            let keep = match limits.max_array_length {
                0 => items.len(),
                max => items.len().min(max),
            };
            let mut out: Vec<Value> = items[..keep]
                .iter()
                .map(|v| truncate(v, limits, depth + 1))
                .collect();
            if keep < items.len() {
                out.push(Value::String(format!("... {} more items", items.len() - keep)));
            }
            Value::Array(out)
        }
        Value::String(s) => {
            let len = s.chars().count();
            if limits.max_string_length == 0 || len <= limits.max_string_length {
                return value.clone();
            }
            let head: String = s.chars().take(limits.max_string_length).collect();
            Value::String(format!(
                "{}... {} more characters",
                head,
                len - limits.max_string_length
            ))
        }
        other => other.clone(),
    }
}
