#![allow(dead_code)]

use chrono::NaiveDate;
use product_page::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn release(url: &str, release_date: NaiveDate) -> ReleaseRecord {
    ReleaseRecord::new(url, release_date, 100.0, 1, release_date.to_string())
}

pub fn priced_release(price: f64) -> ReleaseRecord {
    ReleaseRecord::new("https://outlier.nyc/shop/x", date(2017, 6, 1), price, 1, "r")
}

pub fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const SAMPLE_CATALOG: &str = r#"[
    {
        "name": "Supermarine Shirt",
        "releases": [
            {"InSitu": "http://outlier.nyc/shop/supermarine", "releaseDate": "2015-05-01",
             "Price": 110, "Colors": 3, "Release": "May 2015", "Product": "Supermarine Tee"},
            {"InSitu": "http://outlier.nyc/shop/supermarine", "releaseDate": "2016-07-07",
             "Price": 125, "Colors": 2, "Release": "Jul 2016", "Product": "Supermarine Shirt"},
            {"InSitu": "http://outlier.nyc/shop/supermarine", "releaseDate": "2018-03-15",
             "Price": 118.5, "Colors": 4, "Release": "Mar 2018", "Product": "Supermarine Shirt"}
        ],
        "summary": {
            "seasonHistogram": [{"label": "Spring", "count": 2}, {"label": "Summer", "count": 1}],
            "monthHistogram": [{"label": "Mar", "count": 1}, {"label": "May", "count": 1}, {"label": "Jul", "count": 1}],
            "releaseGapWeeks": [{"label": "0-26", "count": 0}, {"label": "52+", "count": 2}]
        }
    },
    {
        "name": "Futureworks",
        "releases": [
            {"InSitu": "https://outlier.nyc/shop/futureworks", "releaseDate": "2019-01-10",
             "Price": 198, "Colors": 1, "Release": "Jan 2019"}
        ],
        "summary": {"releaseGapWeeks": [{"label": "0-26", "count": 0}]}
    },
    {"name": "Ghost Product"}
]"#;
