//! Catalog-backed repository implementations.

mod json_catalog;

pub use json_catalog::JsonCatalog;
