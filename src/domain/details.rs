//! Extracted and formatted resource details

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Normalized view of a request, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDetails {
    /// Lower-cased HTTP method
    pub method: String,
    /// Path with placeholders kept verbatim
    pub path: String,
    /// Path variables
    pub params: Map<String, Value>,
    /// Query parameters
    pub query: Map<String, Value>,
    /// Headers
    pub headers: Map<String, Value>,
    /// Parsed body, `{}` when absent
    pub body: Value,
}

impl ResourceDetails {
    /// The `method path` line
    pub fn url_line(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Details plus the variables in effect for the request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestContext {
    pub details: ResourceDetails,
    pub variables: Map<String, Value>,
}

/// Human-readable rendering of a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedOutput {
    /// Resource name
    pub name: String,
    /// Text following the name on the header line (`method path`), if any
    pub summary: Option<String>,
    /// Pretty-printed fields or nested listing
    pub body: Option<String>,
}

impl FormattedOutput {
    /// Header line without styling
    pub fn header(&self) -> String {
        match &self.summary {
            Some(summary) => format!("{} {}", self.name, summary),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for FormattedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())?;
        if let Some(body) = &self.body {
            write!(f, "\n{}", body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_output_display() {
        let out = FormattedOutput {
            name: "Login".to_string(),
            summary: Some("post /login".to_string()),
            body: Some("{}".to_string()),
        };
        assert_eq!(out.to_string(), "Login post /login\n{}");
    }

    #[test]
    fn test_formatted_output_without_body() {
        let out = FormattedOutput {
            name: "Users".to_string(),
            summary: None,
            body: None,
        };
        assert_eq!(out.to_string(), "Users");
    }
}
