//! Catalog product entry.

use serde::{Deserialize, Serialize};

use super::{ProductSummary, ReleaseRecord};

/// A product as listed in the catalog: its name, releases, and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    #[serde(default)]
    pub releases: Vec<ReleaseRecord>,
    #[serde(default)]
    pub summary: ProductSummary,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, releases: Vec<ReleaseRecord>) -> Self {
        Self {
            name: name.into(),
            releases,
            summary: ProductSummary::default(),
        }
    }

    pub fn with_summary(mut self, summary: ProductSummary) -> Self {
        self.summary = summary;
        self
    }
}
