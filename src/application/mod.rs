//! Application layer services assembling the product page.
//!
//! This layer turns catalog data into display values. The two pure
//! computations are free functions; page assembly goes through a service that
//! consumes a repository trait.
//!
//! # Available Services
//!
//! - [`services::archive_url_resolver`] - Era-specific product URLs
//! - [`services::price_range_summarizer`] - Price range and price line
//! - [`services::page_builder`] - Header, summary, and releases table sections
//! - [`services::product_page_service::ProductPageService`] - Full page assembly

pub mod services;
