//! Repository trait for product release data.

use crate::domain::entities::ProductRecord;
use crate::error::AppError;

/// Read-only access to products and their release history.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::JsonCatalog`] - JSON catalog file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseRepository: Send + Sync {
    /// Finds a product by its exact name.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ProductRecord))` if found
    /// - `Ok(None)` if no product has that name
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the underlying source cannot be read.
    fn find_product(&self, name: &str) -> Result<Option<ProductRecord>, AppError>;

    /// Lists all product names in source order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the underlying source cannot be read.
    fn list_names(&self) -> Result<Vec<String>, AppError>;
}
