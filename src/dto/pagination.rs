//! Pagination parameters for the releases table.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Smallest accepted page size.
pub const MIN_PAGE_SIZE: u32 = 10;
/// Largest accepted page size.
pub const MAX_PAGE_SIZE: u32 = 1000;
/// Page size used when neither the caller nor the config picks one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Requested releases-table page.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,

    #[serde(default)]
    pub page_size: Option<u32>,
}

/// A validated window into the releases table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub page_size: u32,
    pub offset: usize,
    pub limit: usize,
}

impl PaginationParams {
    pub fn new(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self { page, page_size }
    }

    /// Validates pagination parameters and converts them to an offset/limit window.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `page_size`: `default_page_size`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the page is 0 or the page size is
    /// outside `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
    pub fn validate_and_get_window(&self, default_page_size: u32) -> Result<PageWindow, AppError> {
        let page = self.page.unwrap_or(1);
        let page_size = self.page_size.unwrap_or(default_page_size);

        if page == 0 {
            return Err(AppError::bad_request(
                "Page must be greater than 0",
                json!({ "page": page }),
            ));
        }

        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size }),
            ));
        }

        let offset = (page as usize - 1) * page_size as usize;

        Ok(PageWindow {
            page,
            page_size,
            offset,
            limit: page_size as usize,
        })
    }
}

/// Pagination metadata for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(window: PageWindow, total_items: usize) -> Self {
        let total_pages = total_items.div_ceil(window.limit) as u32;
        Self {
            page: window.page,
            page_size: window.page_size,
            total_items,
            total_pages,
        }
    }
}
