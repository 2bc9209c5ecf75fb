//! Historical site identities of the product catalog.
//!
//! The storefront moved from `outlier.cc` to `outlier.nyc` once. The first
//! `.nyc` product URL appeared on 2016-07-07, so releases dated before that day
//! belong to the `.cc` era and everything on or after belongs to `.nyc`.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// First day of the `.nyc` era.
pub const ERA_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(2016, 7, 7) {
    Some(date) => date,
    None => panic!("invalid era cutoff"),
};

/// One of the two historical domain names the catalog was served under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainEra {
    Cc,
    Nyc,
}

impl DomainEra {
    /// All eras in chronological order.
    pub const ALL: [DomainEra; 2] = [DomainEra::Cc, DomainEra::Nyc];

    /// Returns the era a release dated `date` belongs to.
    pub fn for_date(date: NaiveDate) -> Self {
        if date < ERA_CUTOFF {
            DomainEra::Cc
        } else {
            DomainEra::Nyc
        }
    }

    /// Bare host of the storefront during this era.
    pub fn host(self) -> &'static str {
        match self {
            DomainEra::Cc => "outlier.cc",
            DomainEra::Nyc => "outlier.nyc",
        }
    }

    /// Top-level domain suffix, including the leading dot.
    pub fn tld(self) -> &'static str {
        match self {
            DomainEra::Cc => ".cc",
            DomainEra::Nyc => ".nyc",
        }
    }

    pub fn other(self) -> Self {
        match self {
            DomainEra::Cc => DomainEra::Nyc,
            DomainEra::Nyc => DomainEra::Cc,
        }
    }

    /// Link text for this era's Web Archive lookup.
    pub fn archive_label(self) -> String {
        format!("Archive.org [{}]", self.host())
    }

    /// Returns the era whose host appears first in `url`, if any.
    pub fn from_url(url: &str) -> Option<Self> {
        DomainEra::ALL
            .into_iter()
            .filter_map(|era| url.find(era.host()).map(|pos| (pos, era)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, era)| era)
    }

    /// Rewrites `url` so it points at this era's host.
    ///
    /// Replaces the first occurrence of the other era's host. Returns `url`
    /// unchanged when that host does not appear.
    pub fn rewrite(self, url: &str) -> String {
        if DomainEra::from_url(url).is_none() {
            tracing::debug!(url, era = %self, "URL mentions no storefront host, leaving unchanged");
        }
        url.replacen(self.other().host(), self.host(), 1)
    }
}

impl fmt::Display for DomainEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tld())
    }
}
