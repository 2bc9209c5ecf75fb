//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any command runs.
//! A `.env` file in the working directory is honoured (loaded by `main.rs`).
//!
//! ## Optional Variables
//!
//! - `CATALOG_PATH` - Catalog file used when a command omits `--catalog`
//! - `RELEASES_PAGE_SIZE` - Default releases-table page size (default: 25, range: 10-1000)
//! - `SHOW_RELEASE_NAMES` - Show the release name column (`true`/`1`, default: off)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

use crate::application::services::PageOptions;
use crate::dto::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<String>,
    pub log_level: String,
    pub log_format: String,
    pub releases_page_size: u32,
    pub show_release_names: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; range checks happen in
    /// [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let catalog_path = env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let releases_page_size = env::var("RELEASES_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let show_release_names = env::var("SHOW_RELEASE_NAMES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            catalog_path,
            log_level,
            log_format,
            releases_page_size,
            show_release_names,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `releases_page_size` is outside 10-1000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.releases_page_size) {
            anyhow::bail!(
                "RELEASES_PAGE_SIZE must be between {} and {}, got {}",
                MIN_PAGE_SIZE,
                MAX_PAGE_SIZE,
                self.releases_page_size
            );
        }

        Ok(())
    }

    /// Display options for [`crate::application::services::ProductPageService`].
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            default_page_size: self.releases_page_size,
            show_release_names: self.show_release_names,
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!(
            "  Catalog: {}",
            self.catalog_path.as_deref().unwrap_or("(from command line)")
        );
        tracing::debug!("  Releases page size: {}", self.releases_page_size);
        tracing::debug!("  Show release names: {}", self.show_release_names);
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
