//! Era-specific product URLs for historical archive links.

use serde::Serialize;

use crate::domain::entities::ReleaseRecord;
use crate::domain::era::DomainEra;
use crate::dto::product_page::ArchiveLink;
use crate::utils::url_rewrite::{archive_lookup_url, upgrade_to_https};

/// The product URL as it would have appeared in each era it was sold in.
///
/// A field is `None` when no release falls in that era.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SiteUrls {
    pub cc_url: Option<String>,
    pub nyc_url: Option<String>,
}

impl SiteUrls {
    pub fn get(&self, era: DomainEra) -> Option<&str> {
        match era {
            DomainEra::Cc => self.cc_url.as_deref(),
            DomainEra::Nyc => self.nyc_url.as_deref(),
        }
    }

    /// The URL the page heading links to: `.nyc` when available, else `.cc`.
    pub fn primary(&self) -> Option<&str> {
        self.nyc_url.as_deref().or(self.cc_url.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.cc_url.is_none() && self.nyc_url.is_none()
    }

    /// Web Archive lookups for every era present, in chronological order.
    pub fn archive_links(&self) -> Vec<ArchiveLink> {
        DomainEra::ALL
            .into_iter()
            .filter_map(|era| {
                self.get(era).map(|site_url| ArchiveLink {
                    era,
                    label: era.archive_label(),
                    site_url: site_url.to_string(),
                    url: archive_lookup_url(site_url),
                })
            })
            .collect()
    }
}

/// Resolves the `.cc` and `.nyc` product URLs for a release history.
///
/// The first release's URL is upgraded to `https` and then rewritten to each
/// era's host, once per era that has at least one release. `releases` is
/// expected in ascending date order so the first URL is the earliest one.
///
/// An empty history yields no URLs. A URL that mentions neither host is used
/// as-is for every era present.
///
/// # Examples
///
/// ```ignore
/// let urls = resolve(&[release("http://outlier.nyc/shirt", 2015, 1, 1)]);
/// assert_eq!(urls.cc_url.as_deref(), Some("https://outlier.cc/shirt"));
/// assert_eq!(urls.nyc_url, None);
/// ```
pub fn resolve(releases: &[ReleaseRecord]) -> SiteUrls {
    let Some(first) = releases.first() else {
        return SiteUrls::default();
    };

    let product_url = upgrade_to_https(&first.product_url);
    let era_url = |era: DomainEra| {
        releases
            .iter()
            .any(|r| DomainEra::for_date(r.release_date) == era)
            .then(|| era.rewrite(&product_url))
    };

    let urls = SiteUrls {
        cc_url: era_url(DomainEra::Cc),
        nyc_url: era_url(DomainEra::Nyc),
    };

    tracing::debug!(
        releases = releases.len(),
        cc_url = ?urls.cc_url,
        nyc_url = ?urls.nyc_url,
        "Resolved era URLs"
    );

    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn release(url: &str, y: i32, m: u32, d: u32) -> ReleaseRecord {
        ReleaseRecord::new(url, NaiveDate::from_ymd_opt(y, m, d).unwrap(), 100.0, 1, "r")
    }

    #[test]
    fn test_empty_history() {
        let urls = resolve(&[]);
        assert!(urls.is_empty());
        assert_eq!(urls, SiteUrls::default());
        assert!(urls.archive_links().is_empty());
    }

    #[test]
    fn test_cc_only_upgrades_scheme() {
        let urls = resolve(&[release("http://outlier.nyc/shirt", 2015, 6, 1)]);
        assert_eq!(urls.cc_url.as_deref(), Some("https://outlier.cc/shirt"));
        assert!(urls.nyc_url.is_none());
    }

    #[test]
    fn test_nyc_only() {
        let urls = resolve(&[
            release("https://outlier.cc/shirt", 2016, 7, 7),
            release("https://outlier.cc/shirt", 2018, 1, 1),
        ]);
        assert!(urls.cc_url.is_none());
        assert_eq!(urls.nyc_url.as_deref(), Some("https://outlier.nyc/shirt"));
    }

    #[test]
    fn test_uses_first_release_url() {
        let urls = resolve(&[
            release("http://outlier.cc/old-slug", 2014, 1, 1),
            release("https://outlier.nyc/new-slug", 2017, 1, 1),
        ]);
        assert_eq!(urls.cc_url.as_deref(), Some("https://outlier.cc/old-slug"));
        assert_eq!(urls.nyc_url.as_deref(), Some("https://outlier.nyc/old-slug"));
    }

    #[test]
    fn test_primary_prefers_nyc() {
        let both = SiteUrls {
            cc_url: Some("a".into()),
            nyc_url: Some("b".into()),
        };
        assert_eq!(both.primary(), Some("b"));

        let cc_only = SiteUrls {
            cc_url: Some("a".into()),
            nyc_url: None,
        };
        assert_eq!(cc_only.primary(), Some("a"));
        assert_eq!(SiteUrls::default().primary(), None);
    }

    #[test]
    fn test_archive_links_order_and_labels() {
        let urls = SiteUrls {
            cc_url: Some("https://outlier.cc/x".into()),
            nyc_url: Some("https://outlier.nyc/x".into()),
        };
        let links = urls.archive_links();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].era, DomainEra::Cc);
        assert_eq!(links[0].label, "Archive.org [outlier.cc]");
        assert_eq!(links[0].url, "https://web.archive.org/web/*/https://outlier.cc/x");
        assert_eq!(links[1].era, DomainEra::Nyc);
        assert_eq!(links[1].site_url, "https://outlier.nyc/x");
    }
}
