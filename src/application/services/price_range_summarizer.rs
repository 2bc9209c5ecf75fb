//! Price range over a product's releases.

use serde::Serialize;
use std::fmt;

use crate::domain::entities::ReleaseRecord;
use crate::utils::price_format::format_price;

/// Lowest and highest release price of a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Computes the range over `releases`. Returns `None` for an empty slice.
    pub fn from_releases(releases: &[ReleaseRecord]) -> Option<Self> {
        let (first, rest) = releases.split_first()?;
        let start = Self {
            min: first.price,
            max: first.price,
        };

        Some(rest.iter().fold(start, |range, r| Self {
            min: range.min.min(r.price),
            max: range.max.max(r.price),
        }))
    }

    /// True when every release sold at the same price.
    pub fn is_single(&self) -> bool {
        self.min == self.max
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "Price: ${}", format_price(self.min))
        } else {
            write!(
                f,
                "Price: ${} - ${}",
                format_price(self.min),
                format_price(self.max)
            )
        }
    }
}

/// Formats the price line shown under the product heading.
///
/// Returns `None` when there are no releases; callers are expected to skip
/// the page entirely in that case.
pub fn summarize(releases: &[ReleaseRecord]) -> Option<String> {
    PriceRange::from_releases(releases).map(|range| range.to_string())
}
