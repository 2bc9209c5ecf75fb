//! Business logic services for the application layer.

pub mod archive_url_resolver;
pub mod page_builder;
pub mod price_range_summarizer;
pub mod product_page_service;

pub use archive_url_resolver::{SiteUrls, resolve};
pub use price_range_summarizer::{PriceRange, summarize};
pub use product_page_service::{PageOptions, ProductPageService};
