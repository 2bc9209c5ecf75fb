//! JSON catalog implementation of the release repository.

use std::fs;
use std::path::Path;

use validator::Validate;

use crate::domain::entities::ProductRecord;
use crate::domain::repositories::ReleaseRepository;
use crate::error::{AppError, map_io_error, map_json_error, map_validation_errors};

/// In-memory catalog loaded from a JSON export.
///
/// The file holds a top-level array of products:
///
/// ```json
/// [
///   {
///     "name": "Supermarine Shirt",
///     "releases": [
///       { "InSitu": "http://outlier.nyc/shop/supermarine", "releaseDate": "2015-05-01",
///         "Price": 110, "Colors": 3, "Release": "May 2015" }
///     ],
///     "summary": { "monthHistogram": [], "seasonHistogram": [], "releaseGapWeeks": [] }
///   }
/// ]
/// ```
///
/// Every release is validated once at load time.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    products: Vec<ProductRecord>,
}

impl JsonCatalog {
    /// Reads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the file cannot be read or parsed.
    /// Returns [`AppError::Validation`] if a release fails validation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|e| map_io_error(e, &path_str))?;
        let products: Vec<ProductRecord> =
            serde_json::from_str(&raw).map_err(|e| map_json_error(e, &path_str))?;
        let catalog = Self::from_products(products)?;

        tracing::info!(
            path = %path_str,
            products = catalog.products.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Parses and validates a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on malformed JSON.
    /// Returns [`AppError::Validation`] if a release fails validation.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let products: Vec<ProductRecord> =
            serde_json::from_str(raw).map_err(|e| map_json_error(e, "<inline>"))?;
        Self::from_products(products)
    }

    /// Wraps already-parsed products after validating their releases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a release fails validation.
    pub fn from_products(products: Vec<ProductRecord>) -> Result<Self, AppError> {
        for product in &products {
            for (index, release) in product.releases.iter().enumerate() {
                release
                    .validate()
                    .map_err(|e| map_validation_errors(e, &product.name, index))?;
            }
        }

        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ReleaseRepository for JsonCatalog {
    fn find_product(&self, name: &str) -> Result<Option<ProductRecord>, AppError> {
        Ok(self.products.iter().find(|p| p.name == name).cloned())
    }

    fn list_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.products.iter().map(|p| p.name.clone()).collect())
    }
}
