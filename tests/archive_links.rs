mod common;

use common::{date, release};
use product_page::prelude::*;

#[test]
fn test_empty_history_has_no_urls() {
    let urls = resolve(&[]);
    assert!(urls.cc_url.is_none());
    assert!(urls.nyc_url.is_none());
}

#[test]
fn test_all_before_cutoff_is_cc_only() {
    let releases = vec![
        release("https://outlier.nyc/shop/pants", date(2013, 2, 1)),
        release("https://outlier.nyc/shop/pants", date(2015, 11, 30)),
        release("https://outlier.nyc/shop/pants", date(2016, 7, 6)),
    ];

    let urls = resolve(&releases);

    assert_eq!(urls.cc_url.as_deref(), Some("https://outlier.cc/shop/pants"));
    assert!(urls.nyc_url.is_none());
}

#[test]
fn test_all_on_or_after_cutoff_is_nyc_only() {
    let releases = vec![
        release("http://outlier.cc/shop/pants", ERA_CUTOFF),
        release("http://outlier.cc/shop/pants", date(2021, 4, 2)),
    ];

    let urls = resolve(&releases);

    assert!(urls.cc_url.is_none());
    assert_eq!(urls.nyc_url.as_deref(), Some("https://outlier.nyc/shop/pants"));
}

#[test]
fn test_straddling_cutoff_differs_only_in_suffix() {
    let releases = vec![
        release("https://outlier.nyc/shop/shorts", date(2016, 5, 1)),
        release("https://outlier.nyc/shop/shorts", date(2016, 8, 1)),
    ];

    let urls = resolve(&releases);
    let cc = urls.cc_url.unwrap();
    let nyc = urls.nyc_url.unwrap();

    assert_ne!(cc, nyc);
    assert_eq!(cc.replace("outlier.cc", "outlier.nyc"), nyc);
}

#[test]
fn test_scheme_upgrade_before_cutoff() {
    let urls = resolve(&[release("http://outlier.nyc/shirt", date(2015, 1, 1))]);
    assert_eq!(urls.cc_url.as_deref(), Some("https://outlier.cc/shirt"));
}

#[test]
fn test_schemeless_url_is_kept() {
    let urls = resolve(&[release("outlier.cc/shirt", date(2017, 1, 1))]);
    assert_eq!(urls.nyc_url.as_deref(), Some("outlier.nyc/shirt"));
}

#[test]
fn test_foreign_host_passes_through() {
    let urls = resolve(&[
        release("http://shop.example.com/shirt", date(2015, 1, 1)),
        release("http://shop.example.com/shirt", date(2017, 1, 1)),
    ]);

    assert_eq!(urls.cc_url.as_deref(), Some("https://shop.example.com/shirt"));
    assert_eq!(urls.nyc_url.as_deref(), Some("https://shop.example.com/shirt"));
}

#[test]
fn test_resolve_is_idempotent() {
    let releases = vec![
        release("http://outlier.nyc/shop/a", date(2014, 1, 1)),
        release("http://outlier.nyc/shop/a", date(2019, 1, 1)),
    ];

    assert_eq!(resolve(&releases), resolve(&releases));
}

#[test]
fn test_unsorted_input_still_partitions_every_release() {
    let releases = vec![
        release("http://outlier.nyc/shop/a", date(2019, 1, 1)),
        release("http://outlier.nyc/shop/a", date(2014, 1, 1)),
    ];

    let urls = resolve(&releases);
    assert!(urls.cc_url.is_some());
    assert!(urls.nyc_url.is_some());
}

#[test]
fn test_archive_links_follow_eras() {
    let urls = resolve(&[release("http://outlier.nyc/shop/a", date(2014, 1, 1))]);
    let links = urls.archive_links();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].era, DomainEra::Cc);
    assert_eq!(
        links[0].url,
        "https://web.archive.org/web/*/https://outlier.cc/shop/a"
    );
}
