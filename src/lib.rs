//! # Product Page
//!
//! View model for a single product's detail page in a catalog browser.
//!
//! The crate does not render anything. It turns release records and summary
//! statistics computed upstream into the values a renderer displays: era
//! product URLs with Web Archive links, the price line, histograms, and a
//! paginated releases table.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Release entities, the `.cc` / `.nyc` era split, repository traits
//! - **Application Layer** ([`application`]) - URL resolution, price summary, page assembly
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON catalog repository
//! - **DTO Layer** ([`dto`]) - Serializable page view and pagination
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --catalog catalog.json show "Supermarine Shirt"
//! ```
//!
//! ## Configuration
//!
//! CLI configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        PageOptions, PriceRange, ProductPageService, SiteUrls, resolve, summarize,
    };
    pub use crate::domain::entities::{HistogramBin, ProductRecord, ProductSummary, ReleaseRecord};
    pub use crate::domain::era::{DomainEra, ERA_CUTOFF};
    pub use crate::domain::repositories::ReleaseRepository;
    pub use crate::dto::{PaginationParams, ProductPageView};
    pub use crate::error::AppError;
    pub use crate::infrastructure::catalog::JsonCatalog;
}
