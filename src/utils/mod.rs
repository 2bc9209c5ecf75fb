//! Utility functions for URL and price formatting.
//!
//! - [`url_rewrite`] - Scheme upgrade and external lookup URL construction
//! - [`price_format`] - Natural decimal rendering of prices

pub mod price_format;
pub mod url_rewrite;
