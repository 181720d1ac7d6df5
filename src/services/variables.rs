//! Variable scope
//!
//! Merges collection, configuration and command-line variables and fills
//! `{{name}}` and `:name` placeholders in extracted details.

use crate::domain::{KeyValue, RequestContext, ResourceDetails};
use crate::error::ConfigError;
use crate::services::extractor::to_object;
use serde_json::{Map, Value};

/// Variables available to a request, later sources overriding earlier ones
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableScope {
    values: Map<String, Value>,
}

impl VariableScope {
    /// Merge collection variables, configured defaults and CLI variables
    pub fn merge(
        collection: &[KeyValue],
        configured: &Map<String, Value>,
        cli: &Map<String, Value>,
    ) -> Self {
        let mut values = to_object(collection);
        for (key, value) in configured.iter().chain(cli.iter()) {
            values.insert(key.clone(), value.clone());
        }
        Self { values }
    }

    /// Parse the `--variables` JSON blob; it must be an object
    pub fn parse_cli(raw: &str) -> Result<Map<String, Value>, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(map),
            other => Err(ConfigError::InvalidValue {
                key: "variables".to_string(),
                message: format!("expected a JSON object, got {}", kind_of(&other)),
            }),
        }
    }

    /// All variables
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Pair details with this scope
    pub fn context(&self, details: ResourceDetails) -> RequestContext {
        RequestContext {
            details,
            variables: self.values.clone(),
        }
    }

    /// Fill placeholders in `details`. Unknown placeholders stay verbatim.
    pub fn apply(&self, details: &ResourceDetails) -> ResourceDetails {
        let params = self.substitute_map(&details.params);

        let path = details
            .path
            .split('/')
            .map(|segment| {
                let segment = self.substitute_str(segment);
                match segment.strip_prefix(':').and_then(|key| params.get(key)) {
                    Some(Value::String(value)) if !value.is_empty() => value.clone(),
                    _ => segment,
                }
            })
            .collect::<Vec<_>>()
            .join("/");

        ResourceDetails {
            method: details.method.clone(),
            path,
            query: self.substitute_map(&details.query),
            headers: self.substitute_map(&details.headers),
            body: self.substitute_value(&details.body),
            params,
        }
    }

    fn substitute_map(&self, map: &Map<String, Value>) -> Map<String, Value> {
        map.iter()
            .map(|(k, v)| (k.clone(), self.substitute_value(v)))
            .collect()
    }

    fn substitute_value(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.substitute_str(s)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|v| self.substitute_value(v)).collect())
            }
            Value::Object(map) => Value::Object(self.substitute_map(map)),
            other => other.clone(),
        }
    }

    /// Replace every `{{name}}` whose name is known
    pub fn substitute_str(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("{{") {
            let Some(len) = rest[start + 2..].find("}}") else {
                break;
            };
            let key = &rest[start + 2..start + 2 + len];
            output.push_str(&rest[..start]);
            match self.values.get(key.trim()) {
                Some(Value::String(value)) => output.push_str(value),
                Some(Value::Null) | None => output.push_str(&rest[start..start + len + 4]),
                Some(other) => output.push_str(&other.to_string()),
            }
            rest = &rest[start + len + 4..];
        }

        output.push_str(rest);
        output
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
