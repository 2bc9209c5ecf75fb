//! Section builders for the product page.
//!
//! Each builder maps already-computed catalog values onto one section of
//! [`crate::dto::ProductPageView`].

use super::archive_url_resolver::SiteUrls;
use super::price_range_summarizer::PriceRange;
use crate::domain::entities::{ProductSummary, ReleaseRecord};
use crate::domain::era::DomainEra;
use crate::dto::pagination::{PageWindow, PaginationMeta};
use crate::dto::product_page::{ProductHeader, ReleaseRow, ReleaseTable, SummaryView};
use crate::utils::price_format::format_price;
use crate::utils::url_rewrite::{GOOGLE_SEARCH_BASE, REDDIT_SEARCH_BASE, search_url};

/// Builds the heading, search links, archive links, and price line.
pub fn build_header(product_name: &str, urls: &SiteUrls, price: PriceRange) -> ProductHeader {
    ProductHeader {
        product_name: product_name.to_string(),
        title: format!("{product_name} [{}]", DomainEra::Nyc.host()),
        link_url: urls.primary().map(str::to_string),
        google_url: search_url(GOOGLE_SEARCH_BASE, product_name),
        reddit_url: search_url(REDDIT_SEARCH_BASE, product_name),
        archive_links: urls.archive_links(),
        price,
        price_line: price.to_string(),
    }
}

/// Passes histograms through and hides the release-gap chart when it is empty.
pub fn build_summary(summary: &ProductSummary) -> SummaryView {
    SummaryView {
        season_histogram: summary.season_histogram.clone(),
        month_histogram: summary.month_histogram.clone(),
        release_gap: summary
            .has_release_gaps()
            .then(|| summary.release_gap_weeks.clone()),
    }
}

/// Builds one page of the releases table.
///
/// Rows keep input order. A window past the end yields no rows.
pub fn build_release_table(
    releases: &[ReleaseRecord],
    show_release_names: bool,
    window: PageWindow,
) -> ReleaseTable {
    let rows = releases
        .iter()
        .skip(window.offset)
        .take(window.limit)
        .map(|r| ReleaseRow {
            price: format_price(r.price),
            colors: r.colors,
            release: r.release.clone(),
            name: if show_release_names {
                r.name.clone()
            } else {
                None
            },
        })
        .collect();

    ReleaseTable {
        title: format!("Releases ({})", releases.len()),
        total: releases.len(),
        show_release_names,
        pagination: PaginationMeta::new(window, releases.len()),
        rows,
    }
}
