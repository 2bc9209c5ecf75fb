//! Release record entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One historical release of a product.
///
/// Field names on the wire follow the upstream catalog export (`InSitu`,
/// `releaseDate`, `Price`, `Colors`, `Release`, `Product`). Callers supply
/// records in ascending `release_date` order; this is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ReleaseRecord {
    /// Product page URL as captured at release time. May be `http` or `https`.
    #[serde(rename = "InSitu")]
    pub product_url: String,

    #[serde(rename = "releaseDate")]
    pub release_date: NaiveDate,

    #[serde(rename = "Price")]
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[serde(rename = "Colors")]
    pub colors: u32,

    /// Human-readable release label, e.g. `"2016-08-04"` or `"Spring drop"`.
    #[serde(rename = "Release")]
    pub release: String,

    /// Per-release product name, shown only when release names are enabled.
    #[serde(rename = "Product", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ReleaseRecord {
    /// Creates a new release record without a release name.
    pub fn new(
        product_url: impl Into<String>,
        release_date: NaiveDate,
        price: f64,
        colors: u32,
        release: impl Into<String>,
    ) -> Self {
        Self {
            product_url: product_url.into(),
            release_date,
            price,
            colors,
            release: release.into(),
            name: None,
        }
    }

    /// Sets the per-release product name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
