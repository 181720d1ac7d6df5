//! Output formatting utilities
//!
//! Provides table, compact and JSON output for CLI commands. Terminal styling
//! lives here only; the core services produce plain data and strings.

use crate::cli::args::OutputFormat;
use crate::domain::{FormattedOutput, NodeKind, RequestContext};
use crate::services::{entry_count, render_listing_with, NestedListing};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as text
pub trait TableDisplay {
    /// Format as a multi-line string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

fn symbol(kind: NodeKind, color: bool) -> String {
    let symbol = kind.symbol().to_string();
    if color {
        symbol.bold().to_string()
    } else {
        symbol
    }
}

fn highlight(name: &str, color: bool) -> String {
    if color {
        name.reversed().to_string()
    } else {
        name.to_string()
    }
}

/// Listing of everything below a resource
#[derive(Debug, Clone, Serialize)]
pub struct ListingOutput {
    pub kind: NodeKind,
    pub name: String,
    pub items: NestedListing,
    #[serde(skip)]
    pub color: bool,
}

impl TableDisplay for ListingOutput {
    fn to_table(&self) -> String {
        let mut output = format!(" {} {}\n", symbol(self.kind, self.color), self.name);
        output.push_str(&render_listing_with(&self.items, |kind, name| {
            format!("{} {}", symbol(kind, self.color), name)
        }));
        output.trim_end().to_string()
    }

    fn to_compact(&self) -> String {
        format!(
            "{}: {} ({} resources)",
            self.name,
            self.items
                .iter()
                .map(|entry| entry.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            entry_count(&self.items)
        )
    }
}

/// Location of a resolved resource
#[derive(Debug, Clone, Serialize)]
pub struct FindOutput {
    pub kind: NodeKind,
    pub name: String,
    /// Names from the collection down to the resource
    pub trail: Vec<String>,
    /// Siblings sharing the resource's name, skipped by resolution
    pub shadowed: usize,
    #[serde(skip)]
    pub color: bool,
}

impl TableDisplay for FindOutput {
    fn to_table(&self) -> String {
        let mut output = format!(
            "{} {}\n  {}",
            symbol(self.kind, self.color),
            highlight(&self.name, self.color),
            self.trail.join(" / ")
        );
        if self.shadowed > 0 {
            output.push_str(&format!(
                "\n  ({} more with the same name; the first one is used)",
                self.shadowed
            ));
        }
        output
    }

    fn to_compact(&self) -> String {
        format!("{} {}", self.kind.symbol(), self.trail.join("/"))
    }
}

/// A shown resource
#[derive(Debug, Clone, Serialize)]
pub struct ShowOutput {
    pub kind: NodeKind,
    pub name: String,
    /// Details of requests and examples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<RequestContext>,
    /// Contents of collections and folders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<NestedListing>,
    #[serde(skip)]
    pub formatted: FormattedOutput,
    #[serde(skip)]
    pub color: bool,
}

impl ShowOutput {
    fn header(&self) -> String {
        let name = highlight(&self.formatted.name, self.color);
        match &self.formatted.summary {
            Some(summary) => format!("{} {}", name, summary),
            None => name,
        }
    }
}

impl TableDisplay for ShowOutput {
    fn to_table(&self) -> String {
        match &self.formatted.body {
            Some(body) => format!("{}\n{}", self.header(), body),
            None => self.header(),
        }
    }

    fn to_compact(&self) -> String {
        self.formatted.header()
    }
}
