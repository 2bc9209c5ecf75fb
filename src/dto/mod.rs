//! Data Transfer Objects handed to the rendering surface.
//!
//! All view DTOs serialize with Serde so a renderer (or `show --json`) can
//! consume them directly. Input parameters are validated before use.

pub mod pagination;
pub mod product_page;

pub use pagination::{PaginationMeta, PaginationParams};
pub use product_page::{ProductHeader, ProductPageView, ReleaseRow, ReleaseTable, SummaryView};
