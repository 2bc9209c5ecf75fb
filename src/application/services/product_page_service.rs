//! Product page assembly service.

use std::sync::Arc;

use serde_json::json;

use super::archive_url_resolver::{SiteUrls, resolve};
use super::page_builder::{build_header, build_release_table, build_summary};
use super::price_range_summarizer::PriceRange;
use crate::domain::entities::ProductRecord;
use crate::domain::repositories::ReleaseRepository;
use crate::dto::pagination::{DEFAULT_PAGE_SIZE, PaginationParams};
use crate::dto::product_page::ProductPageView;
use crate::error::AppError;

/// Display options applied to every page the service builds.
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// Page size used when a request does not specify one.
    pub default_page_size: u32,
    /// Show the per-release product name column unless a request overrides it.
    pub show_release_names: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            show_release_names: false,
        }
    }
}

/// Service for building product detail pages from release data.
///
/// Looks products up through a [`ReleaseRepository`] and combines the era URL
/// resolver, price summarizer, and section builders into one view.
pub struct ProductPageService<R: ReleaseRepository> {
    repository: Arc<R>,
    options: PageOptions,
}

impl<R: ReleaseRepository> ProductPageService<R> {
    /// Creates a new product page service.
    pub fn new(repository: Arc<R>, options: PageOptions) -> Self {
        Self {
            repository,
            options,
        }
    }

    /// Loads a product by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that name.
    /// Returns [`AppError::Internal`] if the repository fails.
    pub fn get_product(&self, name: &str) -> Result<ProductRecord, AppError> {
        self.repository.find_product(name)?.ok_or_else(|| {
            tracing::warn!(product = name, "Product not found");
            AppError::not_found("Product not found", json!({ "name": name }))
        })
    }

    /// Lists every product name known to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the repository fails.
    pub fn list_products(&self) -> Result<Vec<String>, AppError> {
        self.repository.list_names()
    }

    /// Resolves the era-specific product URLs for a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that name.
    pub fn site_urls(&self, name: &str) -> Result<SiteUrls, AppError> {
        let product = self.get_product(name)?;
        Ok(resolve(&product.releases))
    }

    /// Computes the price range for a product.
    ///
    /// Returns `Ok(None)` when the product has no releases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that name.
    pub fn price_range(&self, name: &str) -> Result<Option<PriceRange>, AppError> {
        let product = self.get_product(name)?;
        Ok(PriceRange::from_releases(&product.releases))
    }

    /// Builds the full product page.
    ///
    /// `show_release_names` overrides [`PageOptions::show_release_names`] when set.
    /// Returns `Ok(None)` for a product without releases, which has no page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product has that name.
    /// Returns [`AppError::Validation`] if the pagination parameters are invalid.
    pub fn build_page(
        &self,
        name: &str,
        pagination: PaginationParams,
        show_release_names: Option<bool>,
    ) -> Result<Option<ProductPageView>, AppError> {
        let window = pagination.validate_and_get_window(self.options.default_page_size)?;
        let product = self.get_product(name)?;

        let Some(price) = PriceRange::from_releases(&product.releases) else {
            tracing::info!(product = name, "Product has no releases, nothing to show");
            return Ok(None);
        };

        let urls = resolve(&product.releases);
        let show_names = show_release_names.unwrap_or(self.options.show_release_names);

        tracing::debug!(
            product = name,
            releases = product.releases.len(),
            page = window.page,
            "Building product page"
        );

        Ok(Some(ProductPageView {
            header: build_header(&product.name, &urls, price),
            summary: build_summary(&product.summary),
            releases: build_release_table(&product.releases, show_names, window),
        }))
    }
}
