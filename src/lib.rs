//! pcli - Postman collection explorer library
//!
//! This library loads a Postman collection into a tree of named resources,
//! resolves resources by name path, lists them and formats their request
//! details for the terminal.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`document`]: Collection documents and their sources
//! - [`domain`]: Resource tree and request models
//! - [`error`]: Error types
//! - [`services`]: Resolution, listing, extraction and display

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod fixtures;

pub use error::{AppError, Result};
