//! View model for a single product's detail page.

use serde::Serialize;

use super::pagination::PaginationMeta;
use crate::application::services::price_range_summarizer::PriceRange;
use crate::domain::entities::HistogramBin;
use crate::domain::era::DomainEra;

/// Everything a renderer needs to draw the product page.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPageView {
    pub header: ProductHeader,
    pub summary: SummaryView,
    pub releases: ReleaseTable,
}

/// Heading, external links, and price line.
#[derive(Debug, Clone, Serialize)]
pub struct ProductHeader {
    pub product_name: String,
    /// Heading text, e.g. `"Supermarine Shirt [outlier.nyc]"`.
    pub title: String,
    /// Heading link target. Prefers the `.nyc` URL.
    pub link_url: Option<String>,
    pub google_url: String,
    pub reddit_url: String,
    /// One entry per era with releases, `.cc` first.
    pub archive_links: Vec<ArchiveLink>,
    pub price: PriceRange,
    pub price_line: String,
}

/// External Web Archive lookup for one era's product URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveLink {
    pub era: DomainEra,
    pub label: String,
    /// The era-specific product URL being looked up.
    pub site_url: String,
    pub url: String,
}

/// Histograms shown beside the image gallery.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub season_histogram: Vec<HistogramBin>,
    pub month_histogram: Vec<HistogramBin>,
    /// Absent when every release-gap bin is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_gap: Option<Vec<HistogramBin>>,
}

/// One page of the releases table.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseTable {
    /// Heading text, e.g. `"Releases (12)"`.
    pub title: String,
    pub total: usize,
    pub show_release_names: bool,
    pub pagination: PaginationMeta,
    pub rows: Vec<ReleaseRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRow {
    pub price: String,
    pub colors: u32,
    pub release: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
