//! Collection documents
//!
//! Schema of the collection format, conversion into the resource tree and
//! the sources a document can be loaded from.

pub mod build;
pub mod loader;
pub mod schema;

pub use build::{build_tree, DEFAULT_COLLECTION_NAME};
pub use loader::{
    load_collection, select_source, CollectionSource, FileSource, Loaded, LoadedFrom,
    RemoteSource,
};
pub use schema::CollectionDocument;
