//! Core domain entities representing catalog data.
//!
//! Entities are plain data structures deserialized from the upstream catalog
//! export. They carry no rendering logic.
//!
//! # Entity Types
//!
//! - [`ReleaseRecord`] - One historical release of a product
//! - [`ProductSummary`] - Precomputed histograms for a product
//! - [`ProductRecord`] - A catalog entry tying a name to its releases and summary

pub mod product;
pub mod release;
pub mod summary;

pub use product::ProductRecord;
pub use release::ReleaseRecord;
pub use summary::{HistogramBin, ProductSummary};
