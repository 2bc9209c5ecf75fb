//! Precomputed summary statistics for a product.

use serde::{Deserialize, Serialize};

/// A single histogram or scatter bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub label: String,
    pub count: u32,
}

impl HistogramBin {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Summary statistics computed upstream for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(default)]
    pub month_histogram: Vec<HistogramBin>,
    #[serde(default)]
    pub season_histogram: Vec<HistogramBin>,
    /// Binned weeks between consecutive releases.
    #[serde(default)]
    pub release_gap_weeks: Vec<HistogramBin>,
}

impl ProductSummary {
    /// Returns true if any release-gap bin holds at least one release.
    pub fn has_release_gaps(&self) -> bool {
        self.release_gap_weeks.iter().any(|bin| bin.count >= 1)
    }
}
