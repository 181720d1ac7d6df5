//! Core services over the resource tree
//!
//! Resolution, listing, detail extraction and display composition. All of
//! these are pure reads of an immutable tree and never log or retry.

pub mod composer;
pub mod extractor;
pub mod lister;
pub mod resolver;
pub mod variables;

pub use composer::{Composer, DisplayOptions, Limits, DEFAULT_IGNORE};
pub use extractor::extract_details;
pub use lister::{
    entry_count, render_listing, render_listing_with, ListingEntry, Lister, NestedListing,
    DEFAULT_MAX_DEPTH,
};
pub use resolver::{resolve, resolve_trail, shadowed_siblings};
pub use variables::VariableScope;
